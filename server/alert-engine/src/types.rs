//! Core types for the transformation engine (JSON contracts + internal models).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Inbound types (JSON contract — what Alertmanager sends)
// ---------------------------------------------------------------------------

/// One alert inside a webhook delivery. Every field is defaulted so a partial
/// alert deserializes and degrades instead of rejecting the whole batch;
/// unknown fields are silently ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Alert {
  pub status: String,
  /// Labels use BTreeMap so iteration is lexicographic by key, never
  /// insertion-order dependent.
  pub labels: BTreeMap<String, String>,
  pub annotations: BTreeMap<String, String>,
  #[serde(rename = "startsAt")]
  pub starts_at: String,
  #[serde(rename = "endsAt")]
  pub ends_at: String,
  #[serde(rename = "generatorURL")]
  pub generator_url: String,
  pub fingerprint: String,
}

impl Alert {
  /// Only `firing` alerts become incidents; `resolved` (or anything else)
  /// is skipped upstream.
  pub fn is_firing(&self) -> bool {
    self.status == "firing"
  }

  /// The `alertname` label, or `unknown` when absent.
  pub fn name(&self) -> &str {
    self
      .labels
      .get("alertname")
      .map(String::as_str)
      .unwrap_or("unknown")
  }

  pub fn severity(&self) -> Option<&str> {
    self.labels.get("severity").map(String::as_str)
  }
}

/// One webhook delivery: a group key plus an ordered sequence of alerts.
/// Order carries no semantics but is preserved for deterministic output.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AlertmanagerWebhook {
  #[serde(rename = "groupKey")]
  pub group_key: String,
  pub status: String,
  pub alerts: Vec<Alert>,
}

// ---------------------------------------------------------------------------
// Priority codes
// ---------------------------------------------------------------------------

/// ServiceNow priority-classification code, shared by the `impact` and
/// `urgency` fields. Serializes as the string the table API expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriorityCode {
  #[serde(rename = "1")]
  High,
  #[serde(rename = "2")]
  Medium,
  #[serde(rename = "3")]
  Low,
}

impl PriorityCode {
  /// Parse the ServiceNow wire code ("1" | "2" | "3").
  pub fn from_code(s: &str) -> Option<Self> {
    match s {
      "1" => Some(Self::High),
      "2" => Some(Self::Medium),
      "3" => Some(Self::Low),
      _ => None,
    }
  }

  pub fn as_code(self) -> &'static str {
    match self {
      Self::High => "1",
      Self::Medium => "2",
      Self::Low => "3",
    }
  }
}

// ---------------------------------------------------------------------------
// Outbound types (JSON contract — what we POST to ServiceNow)
// ---------------------------------------------------------------------------

/// One incident payload for the ServiceNow table API. Built fresh per alert,
/// never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncidentRecord {
  pub impact: PriorityCode,
  pub urgency: PriorityCode,
  pub short_description: String,
  pub description: String,
  pub caller_id: String,
  pub state: String,
  /// ServiceNow custom field name for the normalized occurrence time.
  #[serde(rename = "u_occurred_date")]
  pub occurred_at: String,
  pub assignment_group: String,
  pub correlation_id: String,
  pub category: String,
  pub subcategory: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn partial_alert_deserializes_with_defaults() {
    let alert: Alert = serde_json::from_str(r#"{"status": "firing"}"#).unwrap();
    assert!(alert.is_firing());
    assert_eq!(alert.name(), "unknown");
    assert!(alert.labels.is_empty());
    assert!(alert.starts_at.is_empty());
  }

  #[test]
  fn unknown_fields_are_ignored() {
    let alert: Alert = serde_json::from_str(
      r#"{"status": "resolved", "labels": {"alertname": "X"}, "valueString": "y"}"#,
    )
    .unwrap();
    assert!(!alert.is_firing());
    assert_eq!(alert.name(), "X");
  }

  #[test]
  fn priority_code_round_trips_wire_format() {
    assert_eq!(
      serde_json::to_string(&PriorityCode::High).unwrap(),
      r#""1""#
    );
    assert_eq!(PriorityCode::from_code("2"), Some(PriorityCode::Medium));
    assert_eq!(PriorityCode::from_code("critical"), None);
    assert_eq!(PriorityCode::Low.as_code(), "3");
  }

  #[test]
  fn incident_record_uses_servicenow_field_names() {
    let record = IncidentRecord {
      impact: PriorityCode::Low,
      urgency: PriorityCode::Low,
      short_description: "s".into(),
      description: "d".into(),
      caller_id: "c".into(),
      state: "1".into(),
      occurred_at: "2023-01-31 04:00:00".into(),
      assignment_group: "g".into(),
      correlation_id: "x".into(),
      category: "software".into(),
      subcategory: "monitoring".into(),
    };
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["u_occurred_date"], "2023-01-31 04:00:00");
    assert_eq!(json["impact"], "3");
  }
}
