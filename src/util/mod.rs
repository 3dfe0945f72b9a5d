//! Utility modules for mcmon.

mod time_fmt;

pub use time_fmt::format_cache_time;
