use crate::handlers::{
    health::health_check,
    model::{optimize, predict},
};
use crate::schemas::{ApiDoc, AppState};
#[cfg(not(test))]
use axum_prometheus::PrometheusMetricLayer;
use axum::{
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Slack between the model-service timeout and the whole-request timeout.
pub const REQUEST_TIMEOUT_MARGIN: Duration = Duration::from_secs(5);

/// Whole-request timeout. It outlasts the relay's own timeout so a slow
/// model service ends in a 502 envelope rather than an empty 408.
pub fn request_timeout(upstream_timeout: Duration) -> Duration {
    upstream_timeout + REQUEST_TIMEOUT_MARGIN
}

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let timeout = request_timeout(state.upstream_timeout);
    // Unknown paths get the page itself; the bundle has no client-side routes.
    let index = state.static_dir.join("index.html");
    let static_files = ServeDir::new(&state.static_dir).fallback(ServeFile::new(index));

    let router = Router::new()
        // Health check
        .route("/health", get(health_check))
        // Model service relay
        .route("/api/predict", post(predict))
        .route("/api/optimize", post(optimize))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // One global recorder per process, so tests run without it.
    #[cfg(not(test))]
    let router = {
        let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();
        router
            .route("/metrics", get(move || async move { metric_handle.render() }))
            .layer(prometheus_layer)
    };

    router
        .fallback_service(static_files)
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(timeout))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
