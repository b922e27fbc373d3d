//! Timestamp value object.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A moment in time, always UTC, captured when run records are created.
///
/// Ordering follows chronological order, so invocation records can be
/// compared directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Captures the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Wraps an existing UTC datetime.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Signed time elapsed since `earlier`. Negative when `earlier` is
    /// actually later.
    pub fn duration_since(&self, earlier: &Timestamp) -> Duration {
        self.0.signed_duration_since(earlier.0)
    }

    /// Whole milliseconds elapsed since `earlier`, clamped at zero so
    /// clock adjustments never produce negative durations.
    pub fn millis_since(&self, earlier: &Timestamp) -> u64 {
        self.duration_since(earlier).num_milliseconds().max(0) as u64
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use std::thread::sleep;

    #[test]
    fn now_is_ordered_chronologically() {
        let first = Timestamp::now();
        sleep(std::time::Duration::from_millis(10));
        let second = Timestamp::now();

        assert!(first < second);
    }

    #[test]
    fn duration_since_measures_the_gap() {
        let first = Timestamp::now();
        sleep(std::time::Duration::from_millis(10));
        let second = Timestamp::now();

        assert!(second.duration_since(&first).num_milliseconds() >= 10);
    }

    #[test]
    fn millis_since_clamps_reversed_order_to_zero() {
        let first = Timestamp::now();
        sleep(std::time::Duration::from_millis(5));
        let second = Timestamp::now();

        assert!(second.millis_since(&first) >= 5);
        assert_eq!(first.millis_since(&second), 0);
    }

    #[test]
    fn deserializes_from_rfc3339_json() {
        let json = "\"2024-01-15T10:30:00Z\"";
        let ts: Timestamp = serde_json::from_str(json).unwrap();

        assert_eq!(ts.0.year(), 2024);
    }

    #[test]
    fn from_datetime_round_trips_through_serde() {
        let ts = Timestamp::from_datetime(Utc::now());
        let json = serde_json::to_string(&ts).unwrap();
        let back: Timestamp = serde_json::from_str(&json).unwrap();

        assert_eq!(ts, back);
    }
}
