//! Calendar-day comparison for route timestamps.
//!
//! Every timestamp in the domain is a `DateTime<Utc>`. Search filters such
//! as "departing on 2025-06-01" compare calendar days rather than instants,
//! so both sides are normalized to midnight UTC before comparing.

use chrono::{DateTime, NaiveTime, Utc};

/// Truncate a timestamp to midnight (00:00:00.000) of the same UTC day.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use route_server::domain::normalize_to_midnight;
///
/// let t = Utc.with_ymd_and_hms(2025, 6, 1, 17, 45, 12).unwrap();
/// let midnight = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
/// assert_eq!(normalize_to_midnight(t), midnight);
/// ```
pub fn normalize_to_midnight(t: DateTime<Utc>) -> DateTime<Utc> {
    t.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Returns true if both timestamps fall on the same UTC calendar day.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use route_server::domain::same_day;
///
/// let morning = Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap();
/// let evening = Utc.with_ymd_and_hms(2025, 6, 1, 23, 59, 59).unwrap();
/// let next_day = Utc.with_ymd_and_hms(2025, 6, 2, 0, 0, 0).unwrap();
///
/// assert!(same_day(morning, evening));
/// assert!(!same_day(evening, next_day));
/// ```
pub fn same_day(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    normalize_to_midnight(a) == normalize_to_midnight(b)
}
