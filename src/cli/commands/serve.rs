use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use crate::config::{initialize_app_state, HostConfig};
use crate::router::{create_router, request_timeout};

/// Resolves once Ctrl-C arrives, so in-flight relays can finish.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Ctrl-C received, draining connections"),
        Err(e) => warn!(error = %e, "Cannot listen for Ctrl-C; stop the process to exit"),
    }
}

pub async fn serve(config: &HostConfig) -> Result<()> {
    let index = config.static_dir.join("index.html");
    if !index.is_file() {
        warn!(
            static_dir = %config.static_dir.display(),
            "No frontend bundle found; run `trunk build` in workspace/frontend"
        );
    }

    let state = initialize_app_state(config).context("building the model service client")?;
    debug!(
        upstream = %config.upstream_url,
        upstream_timeout = ?config.upstream_timeout,
        request_timeout = ?request_timeout(config.upstream_timeout),
        "Relay configured"
    );
    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("binding {}", config.bind_address))?;
    let local = listener.local_addr()?;

    info!(address = %local, static_dir = %config.static_dir.display(), "Dairy feed page served");
    info!(upstream = %config.upstream_url, "Relaying /api/predict and /api/optimize");
    info!("Swagger UI available at http://{}/swagger-ui", local);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server stopped with an error")?;

    info!("Server shut down");
    Ok(())
}
