//! Short and long incident descriptions.

use crate::types::Alert;

/// ServiceNow short_description column limit.
pub const SHORT_DESCRIPTION_MAX: usize = 160;

/// Truncate to at most `max` characters. Character-based (not byte-based) so
/// multi-byte UTF-8 content never splits mid-character; strings already
/// within the limit pass through unchanged.
fn truncate_chars(s: &str, max: usize) -> String {
  s.chars().take(max).collect()
}

/// Compose `[SEVERITY] alertname: summary`, capped at 160 characters.
///
/// The summary is first-present-wins: `summary` annotation, then
/// `description` annotation, then `instance` label, then empty.
pub fn short_description(alert: &Alert) -> String {
  let severity = alert.severity().unwrap_or("n/a").to_uppercase();
  let summary = alert
    .annotations
    .get("summary")
    .or_else(|| alert.annotations.get("description"))
    .or_else(|| alert.labels.get("instance"))
    .map(String::as_str)
    .unwrap_or("");
  truncate_chars(
    &format!("[{}] {}: {}", severity, alert.name(), summary),
    SHORT_DESCRIPTION_MAX,
  )
}

/// Compose the multi-line incident description: free-text description,
/// generator URL, then every label and annotation as `- key: value`.
///
/// Labels and annotations iterate in lexicographic key order (BTreeMap), so
/// identically-keyed maps produce byte-identical output regardless of the
/// order the inbound JSON listed them in.
pub fn description(alert: &Alert) -> String {
  let mut lines: Vec<String> = Vec::new();

  if let Some(desc) = alert.annotations.get("description") {
    if !desc.is_empty() {
      lines.push(desc.clone());
    }
  }

  if !alert.generator_url.is_empty() {
    if !lines.is_empty() {
      lines.push(String::new());
    }
    lines.push(format!("GeneratorURL: {}", alert.generator_url));
  }

  if !lines.is_empty() {
    lines.push(String::new());
  }
  lines.push("Labels:".into());
  for (k, v) in &alert.labels {
    lines.push(format!("- {}: {}", k, v));
  }

  if !alert.annotations.is_empty() {
    lines.push(String::new());
    lines.push("Annotations:".into());
    for (k, v) in &alert.annotations {
      lines.push(format!("- {}: {}", k, v));
    }
  }

  lines.join("\n")
}
