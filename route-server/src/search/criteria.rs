//! Search criteria and query mode selection.

use chrono::{DateTime, Utc};

use crate::domain::{RouteStatus, Waypoint, same_day};

/// What a searcher is looking for. Every field is optional.
///
/// An empty string is treated the same as an absent field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    pub departure_country: Option<String>,
    pub departure_city: Option<String>,
    pub departure_date: Option<DateTime<Utc>>,
    pub arrival_country: Option<String>,
    pub arrival_city: Option<String>,
    pub arrival_date: Option<DateTime<Utc>>,
    pub status: Option<RouteStatus>,
}

impl SearchCriteria {
    /// Criteria matching every route.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn departing(mut self, country: impl Into<String>, city: impl Into<String>) -> Self {
        self.departure_country = Some(country.into());
        self.departure_city = Some(city.into());
        self
    }

    pub fn arriving(mut self, country: impl Into<String>, city: impl Into<String>) -> Self {
        self.arrival_country = Some(country.into());
        self.arrival_city = Some(city.into());
        self
    }

    pub fn departing_on(mut self, date: DateTime<Utc>) -> Self {
        self.departure_date = Some(date);
        self
    }

    pub fn arriving_on(mut self, date: DateTime<Utc>) -> Self {
        self.arrival_date = Some(date);
        self
    }

    pub fn with_status(mut self, status: RouteStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn departure_country(&self) -> Option<&str> {
        present(&self.departure_country)
    }

    pub fn departure_city(&self) -> Option<&str> {
        present(&self.departure_city)
    }

    pub fn arrival_country(&self) -> Option<&str> {
        present(&self.arrival_country)
    }

    pub fn arrival_city(&self) -> Option<&str> {
        present(&self.arrival_city)
    }

    /// Select how the criteria are matched against routes.
    ///
    /// Segment containment needs both endpoints fully named; anything less
    /// falls back to independent field filtering.
    pub fn mode(&self) -> QueryMode<'_> {
        match (
            self.departure_country(),
            self.departure_city(),
            self.arrival_country(),
            self.arrival_city(),
        ) {
            (Some(dep_country), Some(dep_city), Some(arr_country), Some(arr_city)) => {
                QueryMode::Segment {
                    from: PlaceQuery {
                        country: dep_country,
                        city: dep_city,
                        date: self.departure_date,
                    },
                    to: PlaceQuery {
                        country: arr_country,
                        city: arr_city,
                        date: self.arrival_date,
                    },
                }
            }
            _ => QueryMode::Fields,
        }
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// How a [`SearchCriteria`] is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode<'a> {
    /// Both endpoints named: match routes whose itinerary contains the
    /// segment `from` → `to`, in that direction.
    Segment {
        from: PlaceQuery<'a>,
        to: PlaceQuery<'a>,
    },

    /// Filter each present field independently against the route's own
    /// departure and arrival.
    Fields,
}

impl QueryMode<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            QueryMode::Segment { .. } => "segment",
            QueryMode::Fields => "fields",
        }
    }
}

/// One end of a requested segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceQuery<'a> {
    pub country: &'a str,
    pub city: &'a str,

    /// Calendar day to match, if any.
    pub date: Option<DateTime<Utc>>,
}

impl PlaceQuery<'_> {
    /// Location must match exactly; the date, when given, by calendar day.
    pub fn matches(&self, point: &Waypoint) -> bool {
        point.is_at(self.country, self.city) && self.date.is_none_or(|d| same_day(point.date, d))
    }
}
