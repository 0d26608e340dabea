//! The transformer: one alert + batch metadata -> one incident payload.

use chrono::{DateTime, Utc};

use crate::config::TransformConfig;
use crate::correlate;
use crate::describe;
use crate::severity;
use crate::timefmt;
use crate::types::{Alert, IncidentRecord};

/// Maps alerts to ServiceNow incident payloads. Holds only immutable
/// configuration; every call touches nothing but its own inputs.
pub struct Transformer {
  config: TransformConfig,
}

impl Transformer {
  pub fn new(config: TransformConfig) -> Self {
    Self { config }
  }

  pub fn with_defaults() -> Self {
    Self::new(TransformConfig::default())
  }

  pub fn config(&self) -> &TransformConfig {
    &self.config
  }

  /// Transform one alert into an incident payload.
  ///
  /// Total: every missing or malformed field degrades to a documented
  /// default, never to an error. `now` is the wall-clock fallback for an
  /// unparseable `startsAt`; callers inject it so the mapping stays pure.
  pub fn transform(&self, group_key: &str, alert: &Alert, now: DateTime<Utc>) -> IncidentRecord {
    let (impact, urgency) = severity::impact_urgency(
      alert.severity(),
      (self.config.default_impact, self.config.default_urgency),
    );

    IncidentRecord {
      impact,
      urgency,
      short_description: describe::short_description(alert),
      description: describe::description(alert),
      caller_id: self.config.caller_id.clone(),
      state: self.config.state.clone(),
      occurred_at: timefmt::occurred_at(&alert.starts_at, now),
      assignment_group: self.config.assignment_group.clone(),
      correlation_id: correlate::correlation_id(
        &self.config.correlation_template,
        group_key,
        alert,
      ),
      category: self.config.category.clone(),
      subcategory: self.config.subcategory.clone(),
    }
  }
}
