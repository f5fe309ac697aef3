//! Time and timestamp helpers.
//!
//! The backend reports run timestamps as nanoseconds since the UNIX epoch.

use chrono::{DateTime, TimeZone, Utc};

/// Nanoseconds since the UNIX epoch, as reported by `/status`.
pub type Nanos = i64;

const NANOS_PER_MILLI: Nanos = 1_000_000;
const NANOS_PER_SECOND: f64 = 1e9;

/// Convert a nanosecond timestamp to a UTC date-time.
///
/// The value is truncated to millisecond precision first, which is all a
/// wall-clock display needs. Returns `None` when out of chrono's range.
#[must_use]
pub fn nanos_to_datetime(nanos: Nanos) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(nanos / NANOS_PER_MILLI)
}

/// Seconds elapsed from `start` to `end`, clamped at zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn elapsed_seconds(start: Nanos, end: Nanos) -> f64 {
    (end.saturating_sub(start) as f64 / NANOS_PER_SECOND).max(0.0)
}

/// Render the time-of-day part of `at` in the given zone as `HH:MM:SS`.
#[must_use]
pub fn time_of_day<Tz>(at: DateTime<Utc>, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    at.with_timezone(zone).format("%H:%M:%S").to_string()
}
