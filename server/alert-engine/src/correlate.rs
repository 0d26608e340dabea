//! Correlation-id construction.
//!
//! ServiceNow deduplicates incidents by correlation_id, so the id must be a
//! pure function of the alert identity: retransmitting the same alert yields
//! the same id.

use crate::types::Alert;

/// ServiceNow correlation_id column limit.
pub const CORRELATION_ID_MAX: usize = 255;

/// Render the correlation template for one alert.
///
/// Substitution variables: `{groupKey}`, `{alertname}`, `{instance}` (the
/// first present of the `instance`, `pod`, `namespace` labels) and
/// `{fingerprint}`. Missing variables substitute the empty string. After
/// substitution all whitespace becomes `_` and the result is truncated to
/// 255 characters.
pub fn correlation_id(template: &str, group_key: &str, alert: &Alert) -> String {
  let instance = alert
    .labels
    .get("instance")
    .or_else(|| alert.labels.get("pod"))
    .or_else(|| alert.labels.get("namespace"))
    .map(String::as_str)
    .unwrap_or("");
  let alertname = alert
    .labels
    .get("alertname")
    .map(String::as_str)
    .unwrap_or("");

  let rendered = template
    .replace("{groupKey}", group_key)
    .replace("{alertname}", alertname)
    .replace("{instance}", instance)
    .replace("{fingerprint}", &alert.fingerprint);

  rendered
    .chars()
    .map(|c| if c.is_whitespace() { '_' } else { c })
    .take(CORRELATION_ID_MAX)
    .collect()
}
