//! Preview binary: read webhook JSON from stdin, write incident JSON to stdout.
//!
//! Each input line is one AlertmanagerWebhook document. Output lines are the
//! IncidentRecord payloads its firing alerts would produce, one per line;
//! non-firing alerts produce no output. Lets mappings be checked offline
//! without a ServiceNow instance.

use alert_engine::{AlertmanagerWebhook, Transformer};
use chrono::Utc;
use std::io::{self, BufRead, Write};

fn main() {
  let stdin = io::stdin();
  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());
  let transformer = Transformer::with_defaults();

  for line in stdin.lock().lines() {
    let line = match line {
      Ok(l) => l,
      Err(e) => {
        let _ = writeln!(io::stderr(), "alert-engine: read error: {}", e);
        std::process::exit(1);
      }
    };

    // Skip blank lines.
    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }

    let webhook: AlertmanagerWebhook = match serde_json::from_str(trimmed) {
      Ok(v) => v,
      Err(e) => {
        let _ = writeln!(io::stderr(), "alert-engine: json parse: {}", e);
        continue;
      }
    };

    for alert in webhook.alerts.iter().filter(|a| a.is_firing()) {
      let record = transformer.transform(&webhook.group_key, alert, Utc::now());
      let _ = serde_json::to_writer(&mut out, &record);
      let _ = writeln!(out);
    }
  }

  let _ = out.flush();
}
