//! Server configuration.

use std::net::SocketAddr;

/// Environment variable holding the listen address.
pub const ADDR_VAR: &str = "ROUTE_SERVER_ADDR";

/// Environment variable holding the tracing filter directives.
pub const LOG_VAR: &str = "RUST_LOG";

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "route_server=info,tower_http=info";

/// Error returned when the environment holds an unusable value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {var}: {value:?} is not a socket address")]
pub struct ConfigError {
    var: &'static str,
    value: String,
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// `tracing-subscriber` filter directives.
    pub log_filter: String,
}

impl ServerConfig {
    pub fn new(bind_addr: SocketAddr, log_filter: impl Into<String>) -> Self {
        Self {
            bind_addr,
            log_filter: log_filter.into(),
        }
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// unset or blank variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = match get(ADDR_VAR) {
            Some(value) => value.trim().parse::<SocketAddr>().map_err(|_| ConfigError {
                var: ADDR_VAR,
                value,
            })?,
            None => defaults.bind_addr,
        };

        let log_filter = get(LOG_VAR).unwrap_or(defaults.log_filter);

        Ok(Self {
            bind_addr,
            log_filter,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
