//! Data transfer objects for web requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{InvalidStatus, NewRoute, Route, RouteStatus, RouteStop, Waypoint};
use crate::search::SearchCriteria;

/// An intermediate stop in a creation request.
#[derive(Debug, Clone, Deserialize)]
pub struct StopInput {
    pub country: String,
    pub city: String,

    /// RFC 3339 timestamp
    pub date: DateTime<Utc>,
}

/// Request to create a route.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRouteRequest {
    pub departure_country: String,
    pub departure_city: String,
    pub departure_date: DateTime<Utc>,

    pub arrival_country: String,
    pub arrival_city: String,
    pub arrival_date: DateTime<Utc>,

    /// Stops in itinerary order
    #[serde(default)]
    pub intermediate_stops: Vec<StopInput>,

    pub description: Option<String>,
    pub price: Option<f64>,

    /// Owning transporter, as established by the caller
    pub transporter_id: String,
}

impl CreateRouteRequest {
    pub fn into_new_route(self) -> NewRoute {
        NewRoute {
            departure: Waypoint::new(self.departure_country, self.departure_city, self.departure_date),
            arrival: Waypoint::new(self.arrival_country, self.arrival_city, self.arrival_date),
            intermediate_stops: self
                .intermediate_stops
                .into_iter()
                .map(|s| Waypoint::new(s.country, s.city, s.date))
                .collect(),
            description: self.description,
            price: self.price,
            transporter_id: self.transporter_id,
        }
    }
}

/// Request to search routes. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRoutesRequest {
    pub departure_country: Option<String>,
    pub departure_city: Option<String>,
    pub departure_date: Option<DateTime<Utc>>,
    pub arrival_country: Option<String>,
    pub arrival_city: Option<String>,
    pub arrival_date: Option<DateTime<Utc>>,

    /// Status name, e.g. "PUBLISHED"
    pub status: Option<String>,
}

impl SearchRoutesRequest {
    pub fn into_criteria(self) -> Result<SearchCriteria, InvalidStatus> {
        let status = self
            .status
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(RouteStatus::parse)
            .transpose()?;

        Ok(SearchCriteria {
            departure_country: self.departure_country,
            departure_city: self.departure_city,
            departure_date: self.departure_date,
            arrival_country: self.arrival_country,
            arrival_city: self.arrival_city,
            arrival_date: self.arrival_date,
            status,
        })
    }
}

/// An intermediate stop in responses.
#[derive(Debug, Serialize)]
pub struct StopResult {
    /// Derived stop id: "{route_id}-stop-{index}"
    pub id: String,
    pub country: String,
    pub city: String,
    pub date: DateTime<Utc>,
}

impl StopResult {
    pub fn from_stop(stop: &RouteStop) -> Self {
        Self {
            id: stop.id().to_string(),
            country: stop.country().to_string(),
            city: stop.city().to_string(),
            date: stop.date(),
        }
    }
}

/// A route in responses.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    pub id: String,

    pub departure_country: String,
    pub departure_city: String,
    pub departure_date: DateTime<Utc>,

    pub arrival_country: String,
    pub arrival_city: String,
    pub arrival_date: DateTime<Utc>,

    pub intermediate_stops: Vec<StopResult>,

    pub description: Option<String>,
    pub price: Option<f64>,
    pub transporter_id: String,

    /// Upper-case status name
    pub status: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RouteResult {
    pub fn from_route(route: &Route) -> Self {
        let dep = route.departure();
        let arr = route.arrival();

        Self {
            id: route.id().to_string(),
            departure_country: dep.country.clone(),
            departure_city: dep.city.clone(),
            departure_date: dep.date,
            arrival_country: arr.country.clone(),
            arrival_city: arr.city.clone(),
            arrival_date: arr.date,
            intermediate_stops: route
                .intermediate_stops()
                .iter()
                .map(StopResult::from_stop)
                .collect(),
            description: route.description().map(str::to_string),
            price: route.price(),
            transporter_id: route.transporter_id().to_string(),
            status: route.status().to_string(),
            created_at: route.created_at(),
            updated_at: route.updated_at(),
        }
    }
}

/// A list of routes.
#[derive(Debug, Serialize)]
pub struct RoutesResponse {
    pub routes: Vec<RouteResult>,
}

impl RoutesResponse {
    pub fn from_routes(routes: &[Route]) -> Self {
        Self {
            routes: routes.iter().map(RouteResult::from_route).collect(),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
