//! Response types for the webhook endpoint.

use alert_engine::IncidentRecord;
use serde::Serialize;

/// Outcome for one inbound alert, in alert order.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AlertOutcome {
  /// Non-firing alert; no outbound call was made.
  Skipped { alert: String, reason: String },
  Created {
    alert: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    incident_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sys_id: Option<String>,
  },
  Failed {
    alert: String,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    status_code: Option<u16>,
    /// The payload that failed, for diagnostics.
    incident: IncidentRecord,
  },
}

/// Summary answered to the webhook caller: aggregate counts plus one outcome
/// per inbound alert. A partial failure is visible in both.
#[derive(Debug, Serialize)]
pub struct WebhookSummary {
  pub received: usize,
  pub skipped: usize,
  pub succeeded: usize,
  pub failed: usize,
  pub results: Vec<AlertOutcome>,
}

impl WebhookSummary {
  pub fn new(received: usize, results: Vec<AlertOutcome>) -> Self {
    let mut skipped = 0;
    let mut succeeded = 0;
    let mut failed = 0;
    for outcome in &results {
      match outcome {
        AlertOutcome::Skipped { .. } => skipped += 1,
        AlertOutcome::Created { .. } => succeeded += 1,
        AlertOutcome::Failed { .. } => failed += 1,
      }
    }
    Self {
      received,
      skipped,
      succeeded,
      failed,
      results,
    }
  }

  pub fn any_failed(&self) -> bool {
    self.failed > 0
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn summary_counts_each_outcome_kind() {
    let summary = WebhookSummary::new(
      3,
      vec![
        AlertOutcome::Skipped {
          alert: "a".into(),
          reason: "status=resolved".into(),
        },
        AlertOutcome::Created {
          alert: "b".into(),
          incident_number: Some("INC001".into()),
          sys_id: None,
        },
        AlertOutcome::Failed {
          alert: "c".into(),
          error: "servicenow returned 500: boom".into(),
          status_code: Some(500),
          incident: test_incident_record(),
        },
      ],
    );
    assert_eq!(summary.received, 3);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.succeeded, 1);
    assert_eq!(summary.failed, 1);
    assert!(summary.any_failed());
  }

  #[test]
  fn outcomes_serialize_with_tag() {
    let json = serde_json::to_value(AlertOutcome::Skipped {
      alert: "x".into(),
      reason: "status=resolved".into(),
    })
    .unwrap();
    assert_eq!(json["outcome"], "skipped");
    assert_eq!(json["reason"], "status=resolved");

    let json = serde_json::to_value(AlertOutcome::Created {
      alert: "x".into(),
      incident_number: None,
      sys_id: None,
    })
    .unwrap();
    assert_eq!(json["outcome"], "created");
    assert!(json.get("incident_number").is_none());
  }

  fn test_incident_record() -> IncidentRecord {
    use alert_engine::{Alert, Transformer};
    Transformer::with_defaults().transform("g", &Alert::default(), chrono::Utc::now())
  }
}
