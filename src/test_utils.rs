#[cfg(test)]
pub mod test_utils {
    use crate::model_client::ModelClient;
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::{http::StatusCode, routing::{get, post}, Json, Router};
    use serde_json::{json, Value};
    use std::path::Path;
    use std::time::Duration;
    use tokio::net::TcpListener;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    pub const INDEX_HTML: &str = "<!DOCTYPE html><html><body>dairy feed page</body></html>";

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is taken from RUST_LOG, defaulting to WARN.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// A model service double: predictions succeed, optimizations are infeasible.
    fn stub_model_service() -> Router {
        Router::new()
            .route("/", get(|| async { "model service" }))
            .route(
                "/api/predict",
                post(|Json(body): Json<Value>| async move {
                    let total_dm = ["maize_bran", "cottonseed", "brewers_grain", "grass_silage"]
                        .iter()
                        .map(|key| body[key].as_f64().unwrap_or(0.0))
                        .sum::<f64>();
                    Json(json!({
                        "success": true,
                        "milk_yield": 14.256,
                        "feed_efficiency": 14.256 / total_dm,
                        "total_dm": total_dm,
                    }))
                }),
            )
            .route(
                "/api/optimize",
                post(|| async {
                    (
                        StatusCode::BAD_REQUEST,
                        Json(json!({
                            "success": false,
                            "error": "Optimization failed. Try adjusting target milk yield.",
                        })),
                    )
                }),
            )
    }

    /// A model service double that takes `delay` to answer a prediction.
    fn slow_model_service(delay: Duration) -> Router {
        Router::new().route(
            "/api/predict",
            post(move || async move {
                tokio::time::sleep(delay).await;
                Json(json!({"success": true, "milk_yield": 12.0, "feed_efficiency": 1.2, "total_dm": 10.0}))
            }),
        )
    }

    async fn spawn_model_service(service: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub model service");
        let address = listener.local_addr().expect("Stub has no local address");
        tokio::spawn(async move {
            axum::serve(listener, service)
                .await
                .expect("Stub model service crashed");
        });
        format!("http://{}", address)
    }

    /// Serve the model service double on an ephemeral port and return its base URL.
    pub async fn spawn_stub_model_service() -> String {
        spawn_model_service(stub_model_service()).await
    }

    pub async fn spawn_slow_model_service(delay: Duration) -> String {
        spawn_model_service(slow_model_service(delay)).await
    }

    /// A base URL nothing listens on.
    pub async fn dead_model_service_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind probe listener");
        let address = listener.local_addr().expect("Probe has no local address");
        drop(listener);
        format!("http://{}", address)
    }

    pub fn write_bundle(dir: &Path) {
        std::fs::write(dir.join("index.html"), INDEX_HTML).expect("Failed to write index.html");
        std::fs::write(dir.join("dairyfeed-frontend.js"), "export default function init() {}")
            .expect("Failed to write loader");
        std::fs::write(dir.join("dairyfeed-frontend_bg.wasm"), [0u8, 97, 115, 109])
            .expect("Failed to write module");
    }

    pub fn setup_test_app_state(upstream_url: &str, static_dir: &Path) -> AppState {
        setup_test_app_state_with_timeout(upstream_url, static_dir, Duration::from_secs(5))
    }

    pub fn setup_test_app_state_with_timeout(upstream_url: &str, static_dir: &Path, timeout: Duration) -> AppState {
        AppState {
            model: ModelClient::new(upstream_url, timeout).expect("Failed to build model client"),
            static_dir: static_dir.to_path_buf(),
            upstream_timeout: timeout,
        }
    }

    /// Create axum app for testing
    pub async fn setup_test_app(upstream_url: &str, static_dir: &Path) -> Router {
        let _ = init_test_tracing();
        create_router(setup_test_app_state(upstream_url, static_dir))
    }

    pub async fn setup_test_app_with_timeout(upstream_url: &str, static_dir: &Path, timeout: Duration) -> Router {
        let _ = init_test_tracing();
        create_router(setup_test_app_state_with_timeout(upstream_url, static_dir, timeout))
    }
}
