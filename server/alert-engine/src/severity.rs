//! Severity label -> ServiceNow (impact, urgency) mapping.

use crate::types::PriorityCode;

/// Map a severity label to an (impact, urgency) pair.
///
/// Lookup is case-insensitive and alias-tolerant (`warn` == `warning`).
/// Absent or unrecognized severities fall back to the configured default
/// pair; no input value is an error.
pub fn impact_urgency(
  severity: Option<&str>,
  default: (PriorityCode, PriorityCode),
) -> (PriorityCode, PriorityCode) {
  match severity.unwrap_or("").to_ascii_lowercase().as_str() {
    "critical" => (PriorityCode::High, PriorityCode::High),
    "warning" | "warn" => (PriorityCode::Medium, PriorityCode::Medium),
    "info" => (PriorityCode::Low, PriorityCode::Low),
    _ => default,
  }
}
