//! Integration tests for the transformation engine.

use alert_engine::{AlertmanagerWebhook, PriorityCode, Transformer};
use chrono::{TimeZone, Utc};

fn fixture_webhook() -> AlertmanagerWebhook {
  let json = r#"{
    "version": "4",
    "groupKey": "{}:{alertname=\"HighCPUUsage\"}",
    "status": "firing",
    "receiver": "servicenow",
    "alerts": [
      {
        "status": "firing",
        "labels": {
          "alertname": "HighCPUUsage",
          "severity": "critical",
          "instance": "server1",
          "job": "node-exporter"
        },
        "annotations": {
          "summary": "High CPU",
          "description": "CPU usage is above 90% on server1"
        },
        "startsAt": "2023-01-31T04:00:00Z",
        "endsAt": "0001-01-01T00:00:00Z",
        "generatorURL": "http://prometheus.example.com/graph",
        "fingerprint": "b7f9a1c2d3e4f506"
      }
    ]
  }"#;
  serde_json::from_str(json).unwrap()
}

fn fixed_now() -> chrono::DateTime<Utc> {
  Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

#[test]
fn firing_critical_alert_maps_to_p1_incident() {
  let webhook = fixture_webhook();
  let transformer = Transformer::with_defaults();
  let record = transformer.transform(&webhook.group_key, &webhook.alerts[0], fixed_now());

  assert_eq!(record.impact, PriorityCode::High);
  assert_eq!(record.urgency, PriorityCode::High);
  assert!(record.short_description.starts_with("[CRITICAL] HighCPUUsage"));
  assert_eq!(record.occurred_at, "2023-01-31 04:00:00");
}

#[test]
fn description_carries_every_label_in_sorted_order() {
  let webhook = fixture_webhook();
  let transformer = Transformer::with_defaults();
  let record = transformer.transform(&webhook.group_key, &webhook.alerts[0], fixed_now());

  for key in ["alertname", "severity", "instance", "job"] {
    assert_eq!(
      record.description.matches(&format!("- {}:", key)).count(),
      1,
      "label {} should appear exactly once",
      key
    );
  }
  let labels_section = record.description.split("Labels:").nth(1).unwrap();
  let alertname_pos = labels_section.find("- alertname").unwrap();
  let severity_pos = labels_section.find("- severity").unwrap();
  assert!(alertname_pos < severity_pos);
}

#[test]
fn deserialization_order_does_not_change_output() {
  let reordered = r#"{
    "groupKey": "{}:{alertname=\"HighCPUUsage\"}",
    "alerts": [
      {
        "status": "firing",
        "labels": {
          "job": "node-exporter",
          "instance": "server1",
          "severity": "critical",
          "alertname": "HighCPUUsage"
        },
        "annotations": {
          "description": "CPU usage is above 90% on server1",
          "summary": "High CPU"
        },
        "startsAt": "2023-01-31T04:00:00Z",
        "endsAt": "0001-01-01T00:00:00Z",
        "generatorURL": "http://prometheus.example.com/graph",
        "fingerprint": "b7f9a1c2d3e4f506"
      }
    ]
  }"#;
  let a = fixture_webhook();
  let b: AlertmanagerWebhook = serde_json::from_str(reordered).unwrap();

  let transformer = Transformer::with_defaults();
  let ra = transformer.transform(&a.group_key, &a.alerts[0], fixed_now());
  let rb = transformer.transform(&b.group_key, &b.alerts[0], fixed_now());

  assert_eq!(ra.description, rb.description);
  assert_eq!(
    serde_json::to_string(&ra).unwrap(),
    serde_json::to_string(&rb).unwrap()
  );
}

#[test]
fn correlation_id_is_stable_across_repeated_deliveries() {
  let webhook = fixture_webhook();
  let transformer = Transformer::with_defaults();

  let first = transformer.transform(&webhook.group_key, &webhook.alerts[0], fixed_now());
  // Redelivery an hour later: different wall clock, same alert identity.
  let later = Utc.with_ymd_and_hms(2024, 6, 1, 13, 0, 0).unwrap();
  let second = transformer.transform(&webhook.group_key, &webhook.alerts[0], later);

  assert_eq!(first.correlation_id, second.correlation_id);
  assert!(first.correlation_id.chars().count() <= 255);
  assert!(!first.correlation_id.contains(' '));
}

#[test]
fn malformed_timestamps_degrade_to_wall_clock() {
  let transformer = Transformer::with_defaults();
  for bad in ["", "not-a-date", "2023-13-45"] {
    let mut webhook = fixture_webhook();
    webhook.alerts[0].starts_at = bad.into();
    let record = transformer.transform(&webhook.group_key, &webhook.alerts[0], fixed_now());
    assert_eq!(record.occurred_at, "2024-06-01 12:00:00", "input: {:?}", bad);
  }
}

#[test]
fn unrecognized_severity_maps_to_default_pair() {
  let mut webhook = fixture_webhook();
  webhook.alerts[0]
    .labels
    .insert("severity".into(), "page-me-maybe".into());
  let transformer = Transformer::with_defaults();
  let record = transformer.transform(&webhook.group_key, &webhook.alerts[0], fixed_now());
  assert_eq!(record.impact, PriorityCode::Low);
  assert_eq!(record.urgency, PriorityCode::Low);
}
