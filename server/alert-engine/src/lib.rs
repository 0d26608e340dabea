//! Alertmanager -> ServiceNow transformation engine.
//!
//! Maps loosely-typed Alertmanager alerts (label/annotation maps, ISO-8601
//! timestamps, free-text summaries) into strictly-shaped ServiceNow incident
//! payloads (bounded strings, enumerated priority codes, a stable
//! correlation id).
//!
//! Every mapping is total: missing or malformed fields degrade to documented
//! defaults instead of failing. No I/O, no network; pure computation.

pub mod config;
pub mod correlate;
pub mod describe;
pub mod severity;
pub mod timefmt;
pub mod transform;
pub mod types;

pub use config::TransformConfig;
pub use transform::Transformer;
pub use types::{Alert, AlertmanagerWebhook, IncidentRecord, PriorityCode};
