//! Shared application state.

use alert_engine::Transformer;

use crate::submit::ServiceNowClient;

/// Read-only state shared across requests. No locks, no caches; every
/// request touches only its own data plus this configuration.
pub struct AppState {
  pub transformer: Transformer,
  pub servicenow: ServiceNowClient,
  /// Shared-secret webhook token; when set, X-Webhook-Token must match.
  pub webhook_token: Option<String>,
}
