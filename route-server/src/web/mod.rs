//! Web layer for the route server.
//!
//! Translates JSON requests into [`RouteService`](crate::service::RouteService)
//! calls and maps their errors to HTTP status codes.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::{AppState, DynStore};
