//! Segment-containment route search.
//!
//! A query naming both endpoints matches every route whose itinerary passes
//! through the departure and, later on, the arrival. This covers exact
//! matches (the route's own endpoints) and superset routes, where the
//! requested segment is only part of a longer journey:
//!
//! ```text
//! query:   Paris ─────▶ Lyon
//! route:   Berlin ─▶ Paris ─▶ Lyon ─▶ Marseille   (matches)
//! route:   Lyon ─▶ Paris                           (wrong direction)
//! ```
//!
//! Queries missing either endpoint fall back to filtering each present
//! field independently. The status filter is applied last in both modes.
//!
//! Itineraries are short, so each route is checked with a plain nested scan
//! over its point sequence and every query is a full scan over the routes.

use tracing::debug;

use crate::domain::{Route, RouteStatus, Waypoint, same_day};

use super::criteria::{PlaceQuery, QueryMode, SearchCriteria};

/// Return the routes matching `criteria`, preserving input order.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use route_server::domain::{NewRoute, Route, RouteId, Waypoint};
/// use route_server::search::{SearchCriteria, search_routes};
///
/// let at = |h| Utc.with_ymd_and_hms(2025, 6, 1, h, 0, 0).unwrap();
/// let input = NewRoute::direct(
///     Waypoint::new("France", "Paris", at(8)),
///     Waypoint::new("France", "Marseille", at(16)),
///     "transporter-1",
/// )
/// .with_stops(vec![Waypoint::new("France", "Lyon", at(12))]);
/// let route = Route::create(input, RouteId::new("r1"), at(0)).unwrap();
/// let routes = vec![route];
///
/// let onward = SearchCriteria::new()
///     .departing("France", "Lyon")
///     .arriving("France", "Marseille");
/// assert_eq!(search_routes(&routes, &onward).len(), 1);
///
/// let backwards = SearchCriteria::new()
///     .departing("France", "Marseille")
///     .arriving("France", "Paris");
/// assert!(search_routes(&routes, &backwards).is_empty());
/// ```
pub fn search_routes<'a, I>(routes: I, criteria: &SearchCriteria) -> Vec<&'a Route>
where
    I: IntoIterator<Item = &'a Route>,
{
    let mode = criteria.mode();
    let mut candidates = 0usize;

    let matched = routes.into_iter().inspect(|_| candidates += 1).filter(|route| {
        let located = match &mode {
            QueryMode::Segment { from, to } => {
                is_exact_match(route, from, to) || contains_segment(route, from, to)
            }
            QueryMode::Fields => matches_fields(route, criteria),
        };
        located && has_status(route, criteria.status)
    });
    let matched: Vec<&Route> = matched.collect();

    debug!(
        mode = mode.name(),
        candidates,
        matched = matched.len(),
        "route search"
    );

    matched
}

/// The route's own endpoints are the requested ones.
fn is_exact_match(route: &Route, from: &PlaceQuery<'_>, to: &PlaceQuery<'_>) -> bool {
    from.matches(route.departure()) && to.matches(route.arrival())
}

/// Some point matches `from` and a strictly later point matches `to`.
fn contains_segment(route: &Route, from: &PlaceQuery<'_>, to: &PlaceQuery<'_>) -> bool {
    let points: Vec<&Waypoint> = route.itinerary().collect();

    // The first departure match leaves the most room for an arrival after
    // it, so there is no need to try later ones.
    let Some(board) = points.iter().position(|p| from.matches(p)) else {
        return false;
    };

    points[board + 1..].iter().any(|p| to.matches(p))
}

/// Every present field matches the route's own departure or arrival.
fn matches_fields(route: &Route, criteria: &SearchCriteria) -> bool {
    let dep = route.departure();
    let arr = route.arrival();

    criteria.departure_country().is_none_or(|c| dep.country == c)
        && criteria.departure_city().is_none_or(|c| dep.city == c)
        && criteria.departure_date.is_none_or(|d| same_day(dep.date, d))
        && criteria.arrival_country().is_none_or(|c| arr.country == c)
        && criteria.arrival_city().is_none_or(|c| arr.city == c)
        && criteria.arrival_date.is_none_or(|d| same_day(arr.date, d))
}

fn has_status(route: &Route, status: Option<RouteStatus>) -> bool {
    status.is_none_or(|s| route.status() == s)
}
