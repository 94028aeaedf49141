//! Time utilities: the single timestamp format shared by the store, the
//! export file and range comparisons.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// ISO-8601, local wall-clock, second precision.
pub const TS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub fn now() -> NaiveDateTime {
    let n = Local::now().naive_local();
    // stored timestamps have second precision
    n.with_nanosecond(0).unwrap_or(n)
}

pub fn format_ts(ts: &NaiveDateTime) -> String {
    ts.format(TS_FORMAT).to_string()
}

pub fn parse_ts(s: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TS_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f"))
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}

/// Midnight at the start of `d`, formatted for range comparisons.
pub fn day_start_ts(d: NaiveDate) -> String {
    format_ts(&d.and_time(NaiveTime::MIN))
}
