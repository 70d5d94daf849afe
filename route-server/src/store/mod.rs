//! Route persistence contract.
//!
//! The service layer only needs save / fetch / delete by id plus a few
//! whole-collection reads. Backends implement [`RouteStore`]; the crate ships
//! an in-memory implementation.

mod error;
mod memory;

pub use error::StoreError;
pub use memory::InMemoryRouteStore;

use crate::domain::{Route, RouteId};
use crate::search::SearchCriteria;

/// Storage for the latest snapshot of each route, keyed by [`RouteId`].
///
/// Implementations must serialize writes per id. No version token is
/// checked, so concurrent read-modify-write cycles resolve as last write wins.
pub trait RouteStore: Send + Sync {
    /// Insert or replace the snapshot for `route.id()`.
    fn save(&self, route: Route) -> Result<Route, StoreError>;

    fn find_by_id(&self, id: &RouteId) -> Result<Option<Route>, StoreError>;

    fn find_all(&self) -> Result<Vec<Route>, StoreError>;

    /// Routes owned by the given transporter.
    fn find_by_owner(&self, transporter_id: &str) -> Result<Vec<Route>, StoreError>;

    /// Routes matching `criteria`, as decided by
    /// [`search_routes`](crate::search::search_routes).
    fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Route>, StoreError>;

    /// Remove a route. Returns false if it was not stored.
    fn delete(&self, id: &RouteId) -> Result<bool, StoreError>;
}

/// Lets a shared or type-erased store stand in wherever a store is expected.
impl<T: RouteStore + ?Sized> RouteStore for std::sync::Arc<T> {
    fn save(&self, route: Route) -> Result<Route, StoreError> {
        (**self).save(route)
    }

    fn find_by_id(&self, id: &RouteId) -> Result<Option<Route>, StoreError> {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> Result<Vec<Route>, StoreError> {
        (**self).find_all()
    }

    fn find_by_owner(&self, transporter_id: &str) -> Result<Vec<Route>, StoreError> {
        (**self).find_by_owner(transporter_id)
    }

    fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Route>, StoreError> {
        (**self).search(criteria)
    }

    fn delete(&self, id: &RouteId) -> Result<bool, StoreError> {
        (**self).delete(id)
    }
}
