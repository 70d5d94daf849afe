//! Route application service.
//!
//! Ties the domain to its collaborators: builds routes from creation
//! commands, drives lifecycle transitions (fetch → transition → save) and
//! forwards searches to the store. Performs no authorization.

mod ports;

pub use ports::{Clock, IdSource, SystemClock, UuidSource};

use tracing::{info, warn};

use crate::domain::{Action, InvalidTransition, NewRoute, Route, RouteId, ValidationError};
use crate::search::SearchCriteria;
use crate::store::{RouteStore, StoreError};

/// Errors surfaced by [`RouteService`] operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ServiceError {
    /// Creation input broke a route invariant
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Lifecycle action not allowed from the current status
    #[error(transparent)]
    InvalidTransition(#[from] InvalidTransition),

    /// No route stored under this id
    #[error("route with id '{0}' not found")]
    NotFound(RouteId),

    /// Store failure, passed through unchanged
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Route operations over a store, a clock and an id source.
pub struct RouteService<S, C = SystemClock, I = UuidSource> {
    store: S,
    clock: C,
    ids: I,
}

impl<S: RouteStore> RouteService<S> {
    /// Create a service using wall-clock time and UUID identifiers.
    pub fn new(store: S) -> Self {
        Self::with_collaborators(store, SystemClock, UuidSource)
    }
}

impl<S: RouteStore, C: Clock, I: IdSource> RouteService<S, C, I> {
    pub fn with_collaborators(store: S, clock: C, ids: I) -> Self {
        Self { store, clock, ids }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validate and store a new route in the `Created` state.
    pub fn create_route(&self, input: NewRoute) -> Result<Route, ServiceError> {
        let id = self.ids.next_id();
        let route = Route::create(input, id, self.clock.now()).inspect_err(|e| {
            warn!(error = %e, "rejected route");
        })?;

        let route = self.store.save(route)?;
        info!(
            route_id = %route.id(),
            transporter_id = route.transporter_id(),
            stops = route.intermediate_stops().len(),
            "route created"
        );
        Ok(route)
    }

    pub fn publish_route(&self, id: &RouteId) -> Result<Route, ServiceError> {
        self.transition(id, Action::Publish)
    }

    pub fn cancel_route(&self, id: &RouteId) -> Result<Route, ServiceError> {
        self.transition(id, Action::Cancel)
    }

    pub fn complete_route(&self, id: &RouteId) -> Result<Route, ServiceError> {
        self.transition(id, Action::Complete)
    }

    /// Fetch, transition and re-store a route.
    ///
    /// A rejected transition leaves the stored snapshot untouched.
    fn transition(&self, id: &RouteId, action: Action) -> Result<Route, ServiceError> {
        let current = self
            .store
            .find_by_id(id)?
            .ok_or_else(|| ServiceError::NotFound(id.clone()))?;

        let next = current
            .transition(action, self.clock.now())
            .inspect_err(|e| {
                warn!(route_id = %id, error = %e, "rejected transition");
            })?;

        let saved = self.store.save(next)?;
        info!(
            route_id = %id,
            action = %action,
            from = %current.status(),
            to = %saved.status(),
            "route transitioned"
        );
        Ok(saved)
    }

    /// Routes matching `criteria`. An empty result is not an error.
    pub fn search_routes(&self, criteria: &SearchCriteria) -> Result<Vec<Route>, ServiceError> {
        Ok(self.store.search(criteria)?)
    }

    pub fn routes_by_owner(&self, transporter_id: &str) -> Result<Vec<Route>, ServiceError> {
        Ok(self.store.find_by_owner(transporter_id)?)
    }

    pub fn route_by_id(&self, id: &RouteId) -> Result<Option<Route>, ServiceError> {
        Ok(self.store.find_by_id(id)?)
    }

    pub fn all_routes(&self) -> Result<Vec<Route>, ServiceError> {
        Ok(self.store.find_all()?)
    }

    /// Remove a route. Returns false if it did not exist.
    pub fn delete_route(&self, id: &RouteId) -> Result<bool, ServiceError> {
        let deleted = self.store.delete(id)?;
        if deleted {
            info!(route_id = %id, "route deleted");
        }
        Ok(deleted)
    }
}
