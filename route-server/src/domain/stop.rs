//! Waypoints and intermediate stops.

use std::fmt;

use chrono::{DateTime, Utc};

use super::route::RouteId;

/// A place and time on an itinerary: departure, arrival, or a stop in between.
///
/// A `Waypoint` is also the creation input for an intermediate stop; the
/// owning route turns it into a [`RouteStop`] with an identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    pub country: String,
    pub city: String,
    pub date: DateTime<Utc>,
}

impl Waypoint {
    pub fn new(country: impl Into<String>, city: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            country: country.into(),
            city: city.into(),
            date,
        }
    }

    /// Whether both waypoints name the same country and city.
    pub fn same_location(&self, other: &Waypoint) -> bool {
        self.is_at(&other.country, &other.city)
    }

    /// Whether this waypoint is in the given country and city.
    pub fn is_at(&self, country: &str, city: &str) -> bool {
        self.country == country && self.city == city
    }
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} ({})",
            self.city,
            self.country,
            self.date.format("%Y-%m-%d %H:%M")
        )
    }
}

/// Identity of an intermediate stop, derived from its route and position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StopId(String);

impl StopId {
    pub(crate) fn for_position(route: &RouteId, index: usize) -> Self {
        Self(format!("{}-stop-{}", route.as_str(), index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An intermediate stop materialized on a route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteStop {
    id: StopId,
    point: Waypoint,
}

impl RouteStop {
    pub(crate) fn new(route: &RouteId, index: usize, point: Waypoint) -> Self {
        Self {
            id: StopId::for_position(route, index),
            point,
        }
    }

    pub fn id(&self) -> &StopId {
        &self.id
    }

    pub fn point(&self) -> &Waypoint {
        &self.point
    }

    pub fn country(&self) -> &str {
        &self.point.country
    }

    pub fn city(&self) -> &str {
        &self.point.city
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.point.date
    }

    /// Whether both stops are in the same country and city.
    pub fn is_same_location(&self, other: &RouteStop) -> bool {
        self.point.same_location(&other.point)
    }

    pub fn is_in_past(&self, now: DateTime<Utc>) -> bool {
        self.point.date < now
    }
}
