//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::DEFAULT_LOG_FILTER;

/// Install the global subscriber, logging compact lines to stdout.
///
/// Falls back to the default filter if `filter` does not parse.
pub fn init(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|e| {
        eprintln!("Warning: ignoring invalid log filter {filter:?}: {e}");
        EnvFilter::new(DEFAULT_LOG_FILTER)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().compact())
        .init();
}
