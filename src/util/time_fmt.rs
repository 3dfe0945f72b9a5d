//! Timestamp formatting for status metadata.
//!
//! The status API reports when it cached a response as a Unix timestamp
//! (seconds, UTC). A value of `0` means the time is unknown.

use chrono::{DateTime, Utc};

/// Formats a Unix timestamp as `YYYY-MM-DD HH:MM:SS UTC`.
///
/// Returns `None` for `0` (unknown) and for out-of-range values.
pub fn format_cache_time(ts: i64) -> Option<String> {
    if ts == 0 {
        return None;
    }
    let dt: DateTime<Utc> = DateTime::from_timestamp(ts, 0)?;
    Some(dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
}
