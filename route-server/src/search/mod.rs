//! Route search.
//!
//! Answers: "which published routes can carry me from here to there?",
//! including routes where the requested leg is only part of a longer
//! itinerary.

mod criteria;
mod engine;


pub use criteria::{PlaceQuery, QueryMode, SearchCriteria};
pub use engine::search_routes;
