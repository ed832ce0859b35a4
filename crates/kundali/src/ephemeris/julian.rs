//! Julian day <-> civil UTC conversion.

use chrono::{DateTime, TimeZone, Utc};

/// Julian day of 1970-01-01T00:00:00 UTC.
pub const UNIX_EPOCH_JD: f64 = 2440587.5;
pub const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Convert a Julian day to a UTC timestamp, to the nearest millisecond.
///
/// Returns `None` for non-finite values and for days outside chrono's
/// representable range.
pub fn julian_day_to_utc(julian_day: f64) -> Option<DateTime<Utc>> {
    if !julian_day.is_finite() {
        return None;
    }
    let millis = ((julian_day - UNIX_EPOCH_JD) * MILLIS_PER_DAY).round();
    if millis.abs() >= i64::MAX as f64 {
        return None;
    }
    Utc.timestamp_millis_opt(millis as i64).single()
}

pub fn utc_to_julian_day(datetime: DateTime<Utc>) -> f64 {
    datetime.timestamp_millis() as f64 / MILLIS_PER_DAY + UNIX_EPOCH_JD
}
