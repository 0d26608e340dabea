//! Environment-derived service configuration.
//!
//! Read once at startup into an immutable struct; nothing reads the
//! environment mid-request.

use alert_engine::{PriorityCode, TransformConfig};

use crate::error::ConfigError;

#[derive(Debug, Clone)]
pub struct BridgeConfig {
  /// Full ServiceNow table-API URL, e.g.
  /// `https://instance.service-now.com/api/now/table/incident`.
  pub servicenow_url: String,
  pub username: String,
  pub password: String,
  /// When false, outbound TLS certificate verification is disabled
  /// (self-signed test instances).
  pub verify_tls: bool,
  /// Shared secret; when set, inbound requests must carry it in
  /// X-Webhook-Token.
  pub webhook_token: Option<String>,
  pub port: u16,
  pub transform: TransformConfig,
}

impl BridgeConfig {
  pub fn from_env() -> Result<Self, ConfigError> {
    let servicenow_url = std::env::var("SN_URL").map_err(|_| ConfigError::Missing("SN_URL"))?;

    let defaults = TransformConfig::default();
    let transform = TransformConfig {
      default_impact: priority_var("IMPACT_DEFAULT", defaults.default_impact)?,
      default_urgency: priority_var("URGENCY_DEFAULT", defaults.default_urgency)?,
      caller_id: var_or("SN_CALLER_ID", defaults.caller_id),
      assignment_group: var_or("SN_ASSIGNMENT_GROUP", defaults.assignment_group),
      category: var_or("SN_CATEGORY", defaults.category),
      subcategory: var_or("SN_SUBCATEGORY", defaults.subcategory),
      state: var_or("SN_STATE", defaults.state),
      correlation_template: var_or("CORRELATION_FORMAT", defaults.correlation_template),
    };

    let port = match std::env::var("PORT") {
      Ok(v) => v.parse().map_err(|_| ConfigError::Invalid {
        var: "PORT",
        reason: format!("not a valid port: {}", v),
      })?,
      Err(_) => 8080,
    };

    Ok(Self {
      servicenow_url,
      username: var_or("SN_USER", String::new()),
      password: var_or("SN_PASSWORD", String::new()),
      verify_tls: var_or("SN_VERIFY_SSL", "true".into()).eq_ignore_ascii_case("true"),
      webhook_token: std::env::var("WEBHOOK_TOKEN").ok().filter(|t| !t.is_empty()),
      port,
      transform,
    })
  }
}

fn var_or(var: &str, default: String) -> String {
  std::env::var(var).unwrap_or(default)
}

fn priority_var(var: &'static str, default: PriorityCode) -> Result<PriorityCode, ConfigError> {
  match std::env::var(var) {
    Ok(v) => PriorityCode::from_code(&v).ok_or(ConfigError::Invalid {
      var,
      reason: format!("expected 1|2|3, got {}", v),
    }),
    Err(_) => Ok(default),
  }
}
