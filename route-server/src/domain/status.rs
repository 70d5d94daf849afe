//! Route lifecycle states and the transitions between them.

use std::fmt;

/// Error returned when parsing an unknown status name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid route status: {input:?}")]
pub struct InvalidStatus {
    input: String,
}

/// Lifecycle state of a route.
///
/// ```text
/// Created ──publish──▶ Published ──complete──▶ Completed
///    │                   │  ▲
///    │                   └──┘ publish
///    └──cancel──▶ Cancelled ◀──cancel── Published
/// ```
///
/// `Cancelled` and `Completed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteStatus {
    Created,
    Published,
    Cancelled,
    Completed,
}

impl RouteStatus {
    /// Parse a status name, ignoring ASCII case.
    ///
    /// # Examples
    ///
    /// ```
    /// use route_server::domain::RouteStatus;
    ///
    /// assert_eq!(RouteStatus::parse("PUBLISHED").unwrap(), RouteStatus::Published);
    /// assert_eq!(RouteStatus::parse("cancelled").unwrap(), RouteStatus::Cancelled);
    /// assert!(RouteStatus::parse("archived").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, InvalidStatus> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CREATED" => Ok(Self::Created),
            "PUBLISHED" => Ok(Self::Published),
            "CANCELLED" => Ok(Self::Cancelled),
            "COMPLETED" => Ok(Self::Completed),
            _ => Err(InvalidStatus {
                input: s.to_string(),
            }),
        }
    }

    /// Upper-case wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "CREATED",
            Self::Published => "PUBLISHED",
            Self::Cancelled => "CANCELLED",
            Self::Completed => "COMPLETED",
        }
    }

    /// Whether the route may still be published or cancelled.
    pub fn can_be_modified(&self) -> bool {
        matches!(self, Self::Created | Self::Published)
    }

    /// Whether no further transition is possible.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Completed)
    }

    /// Apply a lifecycle action, returning the resulting status.
    pub fn apply(self, action: Action) -> Result<Self, InvalidTransition> {
        match (action, self) {
            (Action::Publish, Self::Created | Self::Published) => Ok(Self::Published),
            (Action::Cancel, Self::Created | Self::Published) => Ok(Self::Cancelled),
            (Action::Complete, Self::Published) => Ok(Self::Completed),
            (action, current) => Err(InvalidTransition { current, action }),
        }
    }
}

impl fmt::Display for RouteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lifecycle operation requested on a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Publish,
    Cancel,
    Complete,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Publish => "publish",
            Self::Cancel => "cancel",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lifecycle action was attempted from a state that does not permit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot {action} route from {current} state")]
pub struct InvalidTransition {
    pub current: RouteStatus,
    pub action: Action,
}
