//! Structured error types for the bridge service.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("config: missing required env var {0}")]
  Missing(&'static str),

  #[error("config: invalid {var}: {reason}")]
  Invalid { var: &'static str, reason: String },
}

/// One alert's submission fault. Always local to that alert; sibling alerts
/// in the batch keep processing.
#[derive(Debug, Error)]
pub enum SubmitError {
  /// ServiceNow answered outside the 2xx range. The raw body is kept
  /// verbatim for operator diagnosis.
  #[error("servicenow returned {status}: {body}")]
  Rejected { status: u16, body: String },

  /// Connection refused, timeout, DNS failure, or an undecodable response.
  #[error("transport: {0}")]
  Transport(#[from] reqwest::Error),
}

impl SubmitError {
  /// Downstream HTTP status, when the fault was a rejection.
  pub fn status_code(&self) -> Option<u16> {
    match self {
      Self::Rejected { status, .. } => Some(*status),
      Self::Transport(_) => None,
    }
  }
}
