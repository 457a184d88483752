//! # Temporal Types
//!
//! UTC-only timestamp type for the Command Center. All "last updated"
//! stamps are UTC with minute-level display precision, matching the
//! dashboard's `2026-02-09 10:12` rendering. Local time conversion is a
//! presentation concern that this crate does not take on.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A UTC timestamp.
///
/// Serializes as ISO 8601; displays as `%Y-%m-%d %H:%M` — the format the
/// dashboard and the Audit Pack use for "last updated" stamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp representing the current UTC time.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Access the underlying `chrono::DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Render the timestamp in the dashboard's display format.
    pub fn to_display_string(&self) -> String {
        self.0.format("%Y-%m-%d %H:%M").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_display_string())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn display_uses_minute_precision() {
        let dt = Utc
            .with_ymd_and_hms(2026, 2, 9, 10, 12, 43)
            .single()
            .unwrap();
        let ts = Timestamp::from_datetime(dt);
        assert_eq!(ts.to_display_string(), "2026-02-09 10:12");
        assert_eq!(format!("{ts}"), "2026-02-09 10:12");
    }

    #[test]
    fn timestamps_are_ordered() {
        let earlier = Timestamp::from_datetime(
            Utc.with_ymd_and_hms(2026, 2, 8, 17, 40, 0).single().unwrap(),
        );
        let later = Timestamp::now();
        assert!(earlier < later);
    }
}
