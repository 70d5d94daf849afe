//! Application state for the web layer.

use std::sync::Arc;

use crate::service::RouteService;
use crate::store::{InMemoryRouteStore, RouteStore};

/// Store handle used by the web layer, independent of the backend.
pub type DynStore = Arc<dyn RouteStore>;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Route operations
    pub routes: Arc<RouteService<DynStore>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(routes: RouteService<DynStore>) -> Self {
        Self {
            routes: Arc::new(routes),
        }
    }

    /// App state backed by an empty in-memory store.
    pub fn in_memory() -> Self {
        let store: DynStore = Arc::new(InMemoryRouteStore::new());
        Self::new(RouteService::new(store))
    }
}
