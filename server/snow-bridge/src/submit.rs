//! Outbound ServiceNow table-API client.

use alert_engine::IncidentRecord;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::error::SubmitError;

/// Upper bound on one outbound call; a timeout is a transport fault, not a
/// crash.
pub const SUBMIT_TIMEOUT: Duration = Duration::from_secs(20);

/// Thin client over the incident table API. One POST per incident, no
/// batching, no retry; duplicate tickets on caller retransmission are
/// deduplicated downstream via correlation_id.
pub struct ServiceNowClient {
  http: reqwest::Client,
  url: String,
  username: String,
  password: String,
}

/// Identifiers extracted from a successful creation response. ServiceNow may
/// omit either; that still counts as success.
#[derive(Debug, Clone)]
pub struct CreatedIncident {
  pub number: Option<String>,
  pub sys_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct TableResponse {
  #[serde(default)]
  result: TableResult,
}

#[derive(Debug, Default, Deserialize)]
struct TableResult {
  #[serde(default)]
  number: Option<String>,
  #[serde(default)]
  sys_id: Option<String>,
}

impl ServiceNowClient {
  pub fn new(
    url: String,
    username: String,
    password: String,
    verify_tls: bool,
  ) -> Result<Self, reqwest::Error> {
    let http = reqwest::Client::builder()
      .timeout(SUBMIT_TIMEOUT)
      .danger_accept_invalid_certs(!verify_tls)
      .build()?;
    Ok(Self {
      http,
      url,
      username,
      password,
    })
  }

  /// Create one incident. Exactly one external mutation per call.
  pub async fn create_incident(
    &self,
    incident: &IncidentRecord,
  ) -> Result<CreatedIncident, SubmitError> {
    debug!(
      short_description = %incident.short_description,
      correlation_id = %incident.correlation_id,
      "creating servicenow incident"
    );

    let response = self
      .http
      .post(&self.url)
      .basic_auth(&self.username, Some(&self.password))
      .json(incident)
      .send()
      .await?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      return Err(SubmitError::Rejected {
        status: status.as_u16(),
        body,
      });
    }

    let body: TableResponse = response.json().await?;
    Ok(CreatedIncident {
      number: body.result.number,
      sys_id: body.result.sys_id,
    })
  }
}
