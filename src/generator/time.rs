//! Wall-clock time for snowflake generation

use chrono::Utc;

/// Current wall-clock time in milliseconds since the Unix epoch
#[inline(always)]
pub fn unix_time_ms() -> i64 {
    Utc::now().timestamp_millis()
}
