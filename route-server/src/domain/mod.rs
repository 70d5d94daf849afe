//! Domain types for the route server.
//!
//! Routes enforce their invariants at construction time and never change
//! afterwards except through lifecycle transitions, which return new
//! snapshots. Code that receives a [`Route`] can trust its validity.

mod error;
mod route;
mod status;
mod stop;
mod time;

pub use error::ValidationError;
pub use route::{NewRoute, Route, RouteId};
pub use status::{Action, InvalidStatus, InvalidTransition, RouteStatus};
pub use stop::{RouteStop, StopId, Waypoint};
pub use time::{normalize_to_midnight, same_day};
