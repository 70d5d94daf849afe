//! Store error types.

/// Failures raised by a [`RouteStore`](super::RouteStore) backend.
///
/// These are propagated unchanged to callers; retry policy, if any,
/// belongs to the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A writer panicked while holding the store lock
    #[error("route store lock poisoned")]
    Poisoned,

    /// Backend-specific failure
    #[error("route store backend error: {message}")]
    Backend { message: String },
}
