//! Monotonic `updated_at` helper

use chrono::{DateTime, Duration, Utc};

/// Returns `now`, or one microsecond past `previous` when the clock has not
/// advanced past it. Microseconds survive a round trip through PostgreSQL.
pub fn next_after(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}
