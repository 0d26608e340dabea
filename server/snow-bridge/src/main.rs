//! Binary entrypoint for the Alertmanager -> ServiceNow bridge.

use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use alert_engine::Transformer;
use snow_bridge::config::BridgeConfig;
use snow_bridge::handlers;
use snow_bridge::state::AppState;
use snow_bridge::submit::ServiceNowClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let config = BridgeConfig::from_env()?;
  let servicenow = ServiceNowClient::new(
    config.servicenow_url.clone(),
    config.username.clone(),
    config.password.clone(),
    config.verify_tls,
  )?;
  let state = Arc::new(AppState {
    transformer: Transformer::new(config.transform.clone()),
    servicenow,
    webhook_token: config.webhook_token.clone(),
  });

  let app = handlers::router(state);

  let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
  info!("snow-bridge listening on http://{}", addr);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;

  Ok(())
}
