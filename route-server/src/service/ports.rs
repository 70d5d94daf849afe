//! Collaborators consumed by the route service: a clock and an id source.

use chrono::{DateTime, Utc};

use crate::domain::RouteId;

/// Source of "now" for creation and transition timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Generator of fresh, unique route identifiers.
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> RouteId;
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidSource;

impl IdSource for UuidSource {
    fn next_id(&self) -> RouteId {
        RouteId::new(uuid::Uuid::new_v4().to_string())
    }
}
