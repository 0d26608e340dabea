//! Alertmanager -> ServiceNow bridge service.
//!
//! HTTP service that receives Alertmanager webhook batches, transforms each
//! firing alert with alert-engine, creates one ServiceNow incident per alert,
//! and answers with a per-alert summary. No persistence, no queue, no retry;
//! each inbound request is processed synchronously and independently.

pub mod config;
pub mod error;
pub mod handlers;
pub mod state;
pub mod submit;
pub mod types;

pub use config::BridgeConfig;
pub use error::{ConfigError, SubmitError};
pub use state::AppState;
pub use submit::ServiceNowClient;
