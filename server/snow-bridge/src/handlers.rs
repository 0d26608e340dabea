//! HTTP handlers and routing for the bridge service.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use alert_engine::{Alert, AlertmanagerWebhook, IncidentRecord, PriorityCode};

use crate::state::AppState;
use crate::types::{AlertOutcome, WebhookSummary};

const TOKEN_HEADER: &str = "x-webhook-token";

pub fn router(state: Arc<AppState>) -> Router {
  Router::new()
    .route("/healthz", get(healthz))
    .route("/readyz", get(readyz))
    .route("/test", get(test_incident))
    .route("/alertmanager", post(alertmanager))
    .layer(CorsLayer::permissive())
    .with_state(state)
}

pub async fn healthz() -> &'static str {
  "ok"
}

pub async fn readyz() -> &'static str {
  "ready"
}

/// Webhook endpoint: token gate, then one transform + submit per alert,
/// strictly in alert order. 200 when nothing failed, 207 Multi-Status when
/// any individual alert failed.
pub async fn alertmanager(
  State(state): State<Arc<AppState>>,
  headers: HeaderMap,
  Json(payload): Json<AlertmanagerWebhook>,
) -> Response {
  if let Err(rejection) = check_token(&state, &headers) {
    return rejection;
  }

  info!(
    group_key = %payload.group_key,
    alerts = payload.alerts.len(),
    "received webhook"
  );

  let mut results = Vec::with_capacity(payload.alerts.len());
  for alert in &payload.alerts {
    results.push(process_alert(&state, &payload.group_key, alert).await);
  }

  let summary = WebhookSummary::new(payload.alerts.len(), results);
  info!(
    skipped = summary.skipped,
    succeeded = summary.succeeded,
    failed = summary.failed,
    "webhook processed"
  );

  let status = if summary.any_failed() {
    StatusCode::MULTI_STATUS
  } else {
    StatusCode::OK
  };
  (status, Json(summary)).into_response()
}

/// Reject the whole request before any alert is processed when the shared
/// secret is configured but absent or wrong.
fn check_token(state: &AppState, headers: &HeaderMap) -> Result<(), Response> {
  let Some(expected) = &state.webhook_token else {
    return Ok(());
  };
  let presented = headers.get(TOKEN_HEADER).and_then(|v| v.to_str().ok());
  if presented == Some(expected.as_str()) {
    Ok(())
  } else {
    warn!("webhook token mismatch");
    Err(
      (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({"error": "invalid webhook token"})),
      )
        .into_response(),
    )
  }
}

async fn process_alert(state: &AppState, group_key: &str, alert: &Alert) -> AlertOutcome {
  let name = alert.name().to_string();

  if !alert.is_firing() {
    info!(alert = %name, status = %alert.status, "skipping non-firing alert");
    return AlertOutcome::Skipped {
      alert: name,
      reason: format!("status={}", alert.status),
    };
  }

  let incident = state.transformer.transform(group_key, alert, Utc::now());
  match state.servicenow.create_incident(&incident).await {
    Ok(created) => {
      info!(
        alert = %name,
        incident_number = created.number.as_deref().unwrap_or("-"),
        "incident created"
      );
      AlertOutcome::Created {
        alert: name,
        incident_number: created.number,
        sys_id: created.sys_id,
      }
    }
    Err(e) => {
      warn!(alert = %name, error = %e, "incident submission failed");
      AlertOutcome::Failed {
        alert: name,
        status_code: e.status_code(),
        error: e.to_string(),
        incident,
      }
    }
  }
}

/// Connectivity probe: create one low-priority test incident and report the
/// outcome. 502 when ServiceNow rejects or is unreachable.
pub async fn test_incident(State(state): State<Arc<AppState>>) -> Response {
  let now = Utc::now();
  let config = state.transformer.config();
  let incident = IncidentRecord {
    impact: PriorityCode::Low,
    urgency: PriorityCode::Low,
    short_description: "Test incident from alertmanager bridge".into(),
    description: "Connectivity check; safe to close.".into(),
    caller_id: config.caller_id.clone(),
    state: config.state.clone(),
    occurred_at: now.format(alert_engine::timefmt::SN_DATETIME_FORMAT).to_string(),
    assignment_group: config.assignment_group.clone(),
    correlation_id: format!("TEST-{}", now.format("%Y%m%d%H%M%S")),
    category: config.category.clone(),
    subcategory: config.subcategory.clone(),
  };

  match state.servicenow.create_incident(&incident).await {
    Ok(created) => (
      StatusCode::OK,
      Json(serde_json::json!({
        "ok": true,
        "incident_number": created.number,
        "sys_id": created.sys_id,
      })),
    )
      .into_response(),
    Err(e) => {
      warn!(error = %e, "test incident failed");
      (
        StatusCode::BAD_GATEWAY,
        Json(serde_json::json!({"ok": false, "error": e.to_string()})),
      )
        .into_response()
    }
  }
}
