//! Domain error types.
//!
//! These errors represent invariant violations caught while building a
//! route. They are raised only at creation time; lifecycle failures are
//! reported separately as [`InvalidTransition`](super::InvalidTransition).

use chrono::{DateTime, Utc};

/// A route could not be created because one of its invariants failed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A required location field was empty or whitespace
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// Arrival is at or before departure
    #[error("arrival date {arrival} must be after departure date {departure}")]
    ArrivalNotAfterDeparture {
        departure: DateTime<Utc>,
        arrival: DateTime<Utc>,
    },

    /// Price is negative or not a number
    #[error("price cannot be negative: received {0}, must be >= 0")]
    NegativePrice(f64),

    /// Intermediate stop is not strictly between its predecessor and the arrival
    #[error(
        "intermediate stop {index} is out of order: stops must be chronologically ordered between departure and arrival"
    )]
    StopsNotOrdered { index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn error_display() {
        let err = ValidationError::EmptyField("departure city");
        assert_eq!(err.to_string(), "departure city must not be empty");

        let departure = Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap();
        let err = ValidationError::ArrivalNotAfterDeparture {
            departure,
            arrival: departure,
        };
        assert!(err.to_string().starts_with("arrival date 2025-06-01"));
        assert!(err.to_string().contains("must be after departure date"));

        let err = ValidationError::NegativePrice(-5.0);
        assert_eq!(
            err.to_string(),
            "price cannot be negative: received -5, must be >= 0"
        );

        let err = ValidationError::StopsNotOrdered { index: 1 };
        assert!(err.to_string().starts_with("intermediate stop 1 is out of order"));
    }
}
