//! Timestamp normalization for the ServiceNow datetime format.

use chrono::{DateTime, Utc};

/// ServiceNow datetime column format (UTC, zero-padded, 24-hour).
pub const SN_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Normalize an Alertmanager `startsAt` timestamp.
///
/// Parse success (RFC 3339, trailing `Z` accepted as UTC) formats the parsed
/// instant; parse failure (empty, malformed, out-of-range) substitutes `now`
/// instead, so a bad timestamp never blocks incident creation. Both branches
/// produce the same `YYYY-MM-DD HH:MM:SS` shape.
pub fn occurred_at(starts_at: &str, now: DateTime<Utc>) -> String {
  match DateTime::parse_from_rfc3339(starts_at) {
    Ok(dt) => dt.with_timezone(&Utc).format(SN_DATETIME_FORMAT).to_string(),
    Err(_) => now.format(SN_DATETIME_FORMAT).to_string(),
  }
}
