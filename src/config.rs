use anyhow::Result;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

use crate::model_client::ModelClient;
use crate::schemas::AppState;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_STATIC_DIR: &str = "workspace/frontend/dist";
pub const DEFAULT_UPSTREAM_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

/// Host settings after CLI flags and environment are merged.
#[derive(Debug, Clone)]
pub struct HostConfig {
    pub bind_address: String,
    pub static_dir: PathBuf,
    pub upstream_url: String,
    pub upstream_timeout: Duration,
}

/// `0.0.0.0:$PORT`, the address hosting platforms expect.
pub fn default_bind_address() -> String {
    let port = std::env::var("PORT")
        .ok()
        .and_then(|port| port.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    format!("0.0.0.0:{}", port)
}

/// Initialize application state from the host settings
pub fn initialize_app_state(config: &HostConfig) -> Result<AppState> {
    debug!("Model service: {} (timeout {:?})", config.upstream_url, config.upstream_timeout);
    let model = ModelClient::new(&config.upstream_url, config.upstream_timeout)?;

    Ok(AppState {
        model,
        static_dir: config.static_dir.clone(),
        upstream_timeout: config.upstream_timeout,
    })
}
