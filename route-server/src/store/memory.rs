//! In-memory route store.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::{Route, RouteId};
use crate::search::{SearchCriteria, search_routes};

use super::{RouteStore, StoreError};

/// Routes in first-insertion order, with an id → position index.
#[derive(Debug, Default)]
struct Entries {
    routes: Vec<Route>,
    positions: HashMap<RouteId, usize>,
}

impl Entries {
    fn upsert(&mut self, route: Route) {
        match self.positions.get(route.id()) {
            Some(&pos) => self.routes[pos] = route,
            None => {
                self.positions.insert(route.id().clone(), self.routes.len());
                self.routes.push(route);
            }
        }
    }

    fn get(&self, id: &RouteId) -> Option<&Route> {
        self.positions.get(id).map(|&pos| &self.routes[pos])
    }

    fn remove(&mut self, id: &RouteId) -> bool {
        let Some(pos) = self.positions.remove(id) else {
            return false;
        };
        self.routes.remove(pos);
        for route in &self.routes[pos..] {
            if let Some(p) = self.positions.get_mut(route.id()) {
                *p -= 1;
            }
        }
        true
    }
}

/// Thread-safe in-memory [`RouteStore`].
///
/// Listing and search results come back in first-insertion order. Saving an
/// existing id replaces its snapshot in place.
#[derive(Debug, Default)]
pub struct InMemoryRouteStore {
    inner: RwLock<Entries>,
}

impl InMemoryRouteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored routes.
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.routes.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.read()?.routes.is_empty())
    }

    /// Remove every route.
    pub fn clear(&self) -> Result<(), StoreError> {
        *self.write()? = Entries::default();
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Entries>, StoreError> {
        self.inner.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Entries>, StoreError> {
        self.inner.write().map_err(|_| StoreError::Poisoned)
    }
}

impl RouteStore for InMemoryRouteStore {
    fn save(&self, route: Route) -> Result<Route, StoreError> {
        self.write()?.upsert(route.clone());
        Ok(route)
    }

    fn find_by_id(&self, id: &RouteId) -> Result<Option<Route>, StoreError> {
        Ok(self.read()?.get(id).cloned())
    }

    fn find_all(&self) -> Result<Vec<Route>, StoreError> {
        Ok(self.read()?.routes.clone())
    }

    fn find_by_owner(&self, transporter_id: &str) -> Result<Vec<Route>, StoreError> {
        Ok(self
            .read()?
            .routes
            .iter()
            .filter(|r| r.transporter_id() == transporter_id)
            .cloned()
            .collect())
    }

    fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Route>, StoreError> {
        let entries = self.read()?;
        Ok(search_routes(&entries.routes, criteria)
            .into_iter()
            .cloned()
            .collect())
    }

    fn delete(&self, id: &RouteId) -> Result<bool, StoreError> {
        Ok(self.write()?.remove(id))
    }
}
