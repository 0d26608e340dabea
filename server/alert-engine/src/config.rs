//! Transformation configuration with sane defaults.

use crate::types::PriorityCode;

/// Configuration-supplied incident fields and mapping defaults. Constructed
/// once at startup and passed into the transformer; never read from the
/// environment mid-request.
#[derive(Debug, Clone)]
pub struct TransformConfig {
  /// Impact assigned when the severity label is absent or unrecognized.
  pub default_impact: PriorityCode,
  /// Urgency assigned when the severity label is absent or unrecognized.
  pub default_urgency: PriorityCode,
  /// ServiceNow sys_id of the reporting caller.
  pub caller_id: String,
  /// ServiceNow sys_id of the assignment group.
  pub assignment_group: String,
  pub category: String,
  pub subcategory: String,
  /// Incident state code. 1 = New.
  pub state: String,
  /// Correlation-id template over {groupKey}, {alertname}, {instance},
  /// {fingerprint}.
  pub correlation_template: String,
}

impl Default for TransformConfig {
  fn default() -> Self {
    Self {
      default_impact: PriorityCode::Low,
      default_urgency: PriorityCode::Low,
      caller_id: String::new(),
      assignment_group: String::new(),
      category: "software".into(),
      subcategory: "monitoring".into(),
      state: "1".into(),
      correlation_template: "{groupKey}:{alertname}:{instance}".into(),
    }
  }
}
