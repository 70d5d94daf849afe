//! The route aggregate.
//!
//! A route is validated once, at creation, and is immutable afterwards.
//! Lifecycle operations never mutate a route: they return a new snapshot
//! sharing the same [`RouteId`], with only the status and `updated_at`
//! replaced. The store keeps the latest snapshot.

use std::fmt;

use chrono::{DateTime, Utc};

use super::error::ValidationError;
use super::status::{Action, InvalidTransition, RouteStatus};
use super::stop::{RouteStop, Waypoint};

/// Opaque route identifier, assigned once at creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteId(String);

impl RouteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Input for creating a route.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRoute {
    pub departure: Waypoint,
    pub arrival: Waypoint,

    /// Stops between departure and arrival, in itinerary order.
    pub intermediate_stops: Vec<Waypoint>,

    pub description: Option<String>,
    pub price: Option<f64>,

    /// The transporter publishing the route.
    pub transporter_id: String,
}

impl NewRoute {
    /// A direct route with no stops, description or price.
    pub fn direct(departure: Waypoint, arrival: Waypoint, transporter_id: impl Into<String>) -> Self {
        Self {
            departure,
            arrival,
            intermediate_stops: Vec::new(),
            description: None,
            price: None,
            transporter_id: transporter_id.into(),
        }
    }

    pub fn with_stops(mut self, stops: Vec<Waypoint>) -> Self {
        self.intermediate_stops = stops;
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A transporter's published itinerary.
///
/// Guaranteed by construction:
/// - arrival is strictly after departure
/// - price, if any, is non-negative
/// - every intermediate stop is strictly after the previous point and
///   strictly before the arrival
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    id: RouteId,
    departure: Waypoint,
    arrival: Waypoint,
    intermediate_stops: Vec<RouteStop>,
    description: Option<String>,
    price: Option<f64>,
    transporter_id: String,
    status: RouteStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Route {
    /// Validate `input` and build a route in the `Created` state.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use route_server::domain::{NewRoute, Route, RouteId, RouteStatus, Waypoint};
    ///
    /// let dep = Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap();
    /// let arr = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    /// let input = NewRoute::direct(
    ///     Waypoint::new("France", "Paris", dep),
    ///     Waypoint::new("France", "Lyon", arr),
    ///     "transporter-1",
    /// );
    ///
    /// let route = Route::create(input.clone(), RouteId::new("r1"), dep).unwrap();
    /// assert_eq!(route.status(), RouteStatus::Created);
    ///
    /// // Arrival at the same instant as departure is rejected
    /// let mut bad = input;
    /// bad.arrival.date = dep;
    /// assert!(Route::create(bad, RouteId::new("r2"), dep).is_err());
    /// ```
    pub fn create(input: NewRoute, id: RouteId, now: DateTime<Utc>) -> Result<Self, ValidationError> {
        validate(&input)?;

        let intermediate_stops = input
            .intermediate_stops
            .into_iter()
            .enumerate()
            .map(|(index, point)| RouteStop::new(&id, index, point))
            .collect();

        Ok(Self {
            id,
            departure: input.departure,
            arrival: input.arrival,
            intermediate_stops,
            description: input.description,
            price: input.price,
            transporter_id: input.transporter_id,
            status: RouteStatus::Created,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn id(&self) -> &RouteId {
        &self.id
    }

    pub fn departure(&self) -> &Waypoint {
        &self.departure
    }

    pub fn arrival(&self) -> &Waypoint {
        &self.arrival
    }

    pub fn intermediate_stops(&self) -> &[RouteStop] {
        &self.intermediate_stops
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn price(&self) -> Option<f64> {
        self.price
    }

    pub fn transporter_id(&self) -> &str {
        &self.transporter_id
    }

    pub fn status(&self) -> RouteStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn is_published(&self) -> bool {
        self.status == RouteStatus::Published
    }

    pub fn can_be_modified(&self) -> bool {
        self.status.can_be_modified()
    }

    /// Whether the route departed before `now`.
    pub fn is_in_past(&self, now: DateTime<Utc>) -> bool {
        self.departure.date < now
    }

    pub fn has_intermediate_stops(&self) -> bool {
        !self.intermediate_stops.is_empty()
    }

    /// The point sequence: departure, each intermediate stop, then arrival.
    pub fn itinerary(&self) -> impl Iterator<Item = &Waypoint> {
        std::iter::once(&self.departure)
            .chain(self.intermediate_stops.iter().map(RouteStop::point))
            .chain(std::iter::once(&self.arrival))
    }

    /// Move to `Published`. Allowed from `Created` and `Published`.
    pub fn publish(&self, now: DateTime<Utc>) -> Result<Self, InvalidTransition> {
        self.transition(Action::Publish, now)
    }

    /// Move to `Cancelled`. Allowed from `Created` and `Published`.
    pub fn cancel(&self, now: DateTime<Utc>) -> Result<Self, InvalidTransition> {
        self.transition(Action::Cancel, now)
    }

    /// Move to `Completed`. Allowed from `Published` only.
    pub fn complete(&self, now: DateTime<Utc>) -> Result<Self, InvalidTransition> {
        self.transition(Action::Complete, now)
    }

    /// Apply `action`, returning the next snapshot. `self` is left untouched.
    pub fn transition(&self, action: Action, now: DateTime<Utc>) -> Result<Self, InvalidTransition> {
        let status = self.status.apply(action)?;
        Ok(self.with_status(status, now))
    }

    fn with_status(&self, status: RouteStatus, now: DateTime<Utc>) -> Self {
        Self {
            status,
            updated_at: now,
            ..self.clone()
        }
    }
}

fn require(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(())
}

fn validate(input: &NewRoute) -> Result<(), ValidationError> {
    require(&input.departure.country, "departure country")?;
    require(&input.departure.city, "departure city")?;
    require(&input.arrival.country, "arrival country")?;
    require(&input.arrival.city, "arrival city")?;
    for stop in &input.intermediate_stops {
        require(&stop.country, "intermediate stop country")?;
        require(&stop.city, "intermediate stop city")?;
    }

    if input.arrival.date <= input.departure.date {
        return Err(ValidationError::ArrivalNotAfterDeparture {
            departure: input.departure.date,
            arrival: input.arrival.date,
        });
    }

    if let Some(price) = input.price {
        if price.is_nan() || price < 0.0 {
            return Err(ValidationError::NegativePrice(price));
        }
    }

    let mut boundary = input.departure.date;
    for (index, stop) in input.intermediate_stops.iter().enumerate() {
        if stop.date <= boundary || stop.date >= input.arrival.date {
            return Err(ValidationError::StopsNotOrdered { index });
        }
        boundary = stop.date;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, h, 0, 0).unwrap()
    }

    fn point(city: &str, h: u32) -> Waypoint {
        Waypoint::new("France", city, at(h))
    }

    fn paris_to_marseille(stops: Vec<Waypoint>) -> NewRoute {
        NewRoute::direct(point("Paris", 8), point("Marseille", 16), "transporter-1")
            .with_stops(stops)
    }

    fn create(input: NewRoute) -> Result<Route, ValidationError> {
        Route::create(input, RouteId::new("route-1"), at(0))
    }

    #[test]
    fn create_sets_initial_state() {
        let route = create(
            paris_to_marseille(vec![point("Lyon", 12)])
                .with_price(80.0)
                .with_description("via Lyon"),
        )
        .unwrap();

        assert_eq!(route.id().as_str(), "route-1");
        assert_eq!(route.status(), RouteStatus::Created);
        assert_eq!(route.created_at(), at(0));
        assert_eq!(route.updated_at(), at(0));
        assert_eq!(route.price(), Some(80.0));
        assert_eq!(route.description(), Some("via Lyon"));
        assert_eq!(route.transporter_id(), "transporter-1");
        assert!(route.has_intermediate_stops());
        assert!(!route.is_published());
        assert!(route.can_be_modified());
    }

    #[test]
    fn stops_get_positional_ids() {
        let route = create(paris_to_marseille(vec![point("Dijon", 10), point("Lyon", 12)])).unwrap();
        let ids: Vec<_> = route
            .intermediate_stops()
            .iter()
            .map(|s| s.id().as_str().to_string())
            .collect();
        assert_eq!(ids, vec!["route-1-stop-0", "route-1-stop-1"]);
        assert_eq!(route.intermediate_stops()[1].city(), "Lyon");
    }

    #[test]
    fn itinerary_is_departure_stops_arrival() {
        let route = create(paris_to_marseille(vec![point("Dijon", 10), point("Lyon", 12)])).unwrap();
        let cities: Vec<_> = route.itinerary().map(|p| p.city.as_str()).collect();
        assert_eq!(cities, vec!["Paris", "Dijon", "Lyon", "Marseille"]);

        let direct = create(paris_to_marseille(vec![])).unwrap();
        assert_eq!(direct.itinerary().count(), 2);
        assert!(!direct.has_intermediate_stops());
    }

    #[test]
    fn arrival_equal_to_departure_rejected() {
        let mut input = paris_to_marseille(vec![]);
        input.arrival.date = input.departure.date;
        assert!(matches!(
            create(input),
            Err(ValidationError::ArrivalNotAfterDeparture { .. })
        ));
    }

    #[test]
    fn arrival_before_departure_rejected() {
        let mut input = paris_to_marseille(vec![]);
        input.arrival.date = at(7);
        assert!(matches!(
            create(input),
            Err(ValidationError::ArrivalNotAfterDeparture { .. })
        ));
    }

    #[test]
    fn price_rules() {
        assert!(create(paris_to_marseille(vec![]).with_price(0.0)).is_ok());
        assert_eq!(
            create(paris_to_marseille(vec![]).with_price(-0.01)),
            Err(ValidationError::NegativePrice(-0.01))
        );
        assert!(matches!(
            create(paris_to_marseille(vec![]).with_price(f64::NAN)),
            Err(ValidationError::NegativePrice(_))
        ));
    }

    #[test]
    fn stop_at_departure_time_rejected() {
        let result = create(paris_to_marseille(vec![point("Lyon", 8)]));
        assert_eq!(result, Err(ValidationError::StopsNotOrdered { index: 0 }));
    }

    #[test]
    fn stop_at_arrival_time_rejected() {
        let result = create(paris_to_marseille(vec![point("Lyon", 16)]));
        assert_eq!(result, Err(ValidationError::StopsNotOrdered { index: 0 }));
    }

    #[test]
    fn stops_out_of_order_rejected() {
        let result = create(paris_to_marseille(vec![point("Lyon", 12), point("Dijon", 10)]));
        assert_eq!(result, Err(ValidationError::StopsNotOrdered { index: 1 }));

        let result = create(paris_to_marseille(vec![point("Lyon", 12), point("Avignon", 12)]));
        assert_eq!(result, Err(ValidationError::StopsNotOrdered { index: 1 }));
    }

    #[test]
    fn empty_location_rejected() {
        let mut input = paris_to_marseille(vec![]);
        input.departure.city = "  ".into();
        assert_eq!(
            create(input),
            Err(ValidationError::EmptyField("departure city"))
        );

        let result = create(paris_to_marseille(vec![Waypoint::new("", "Lyon", at(12))]));
        assert_eq!(
            result,
            Err(ValidationError::EmptyField("intermediate stop country"))
        );
    }

    #[test]
    fn publish_then_complete() {
        let created = create(paris_to_marseille(vec![])).unwrap();

        let err = created.complete(at(1)).unwrap_err();
        assert_eq!(err.current, RouteStatus::Created);
        assert_eq!(err.action, Action::Complete);

        let published = created.publish(at(1)).unwrap();
        let completed = published.complete(at(2)).unwrap();
        assert_eq!(completed.status(), RouteStatus::Completed);
        assert_eq!(completed.updated_at(), at(2));
        assert_eq!(completed.created_at(), at(0));
        assert_eq!(completed.id(), created.id());
    }

    #[test]
    fn transition_leaves_original_untouched() {
        let created = create(paris_to_marseille(vec![point("Lyon", 12)])).unwrap();
        let published = created.publish(at(5)).unwrap();

        assert_eq!(created.status(), RouteStatus::Created);
        assert_eq!(created.updated_at(), at(0));
        assert_eq!(published.status(), RouteStatus::Published);
        assert_eq!(published.updated_at(), at(5));
        assert_eq!(published.intermediate_stops(), created.intermediate_stops());
        assert_eq!(published.departure(), created.departure());
    }

    #[test]
    fn republish_restamps_updated_at() {
        let published = create(paris_to_marseille(vec![]))
            .unwrap()
            .publish(at(1))
            .unwrap();
        let again = published.publish(at(3)).unwrap();
        assert_eq!(again.status(), RouteStatus::Published);
        assert_eq!(again.updated_at(), at(3));
    }

    #[test]
    fn cancel_from_created_and_published() {
        let created = create(paris_to_marseille(vec![])).unwrap();
        assert_eq!(
            created.cancel(at(1)).unwrap().status(),
            RouteStatus::Cancelled
        );
        assert_eq!(
            created.publish(at(1)).unwrap().cancel(at(2)).unwrap().status(),
            RouteStatus::Cancelled
        );
    }

    #[test]
    fn terminal_routes_cannot_move() {
        let cancelled = create(paris_to_marseille(vec![]))
            .unwrap()
            .cancel(at(1))
            .unwrap();
        assert!(!cancelled.can_be_modified());
        assert!(cancelled.publish(at(2)).is_err());
        assert!(cancelled.cancel(at(2)).is_err());
        assert!(cancelled.complete(at(2)).is_err());
    }

    #[test]
    fn in_past_compares_departure() {
        let route = create(paris_to_marseille(vec![])).unwrap();
        assert!(route.is_in_past(at(9)));
        assert!(!route.is_in_past(at(8)));
        assert!(!route.is_in_past(at(8) - Duration::minutes(1)));
    }
}
