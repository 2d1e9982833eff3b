use std::path::PathBuf;
use std::time::Duration;

use common::{FeedAmounts, NutrientBalance, OptimizeRequest, OptimizeResponse, PredictRequest, PredictResponse};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::model_client::ModelClient;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Client for the model service the API routes are relayed to
    pub model: ModelClient,
    /// Directory holding the built frontend bundle
    pub static_dir: PathBuf,
    /// How long a relayed call may wait on the model service
    pub upstream_timeout: Duration,
}

/// Error response
///
/// Shaped like a failed model-service answer so the page renders it the same way.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

impl ErrorResponse {
    pub fn new(code: &str, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.to_string(),
            success: false,
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Model service status ("reachable" or "unreachable")
    pub upstream: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::model::predict,
        crate::handlers::model::optimize,
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            PredictRequest,
            PredictResponse,
            OptimizeRequest,
            OptimizeResponse,
            FeedAmounts,
            NutrientBalance,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "model", description = "Milk yield prediction and feed optimization, relayed to the model service"),
    ),
    info(
        title = "Dairy Feed API",
        description = "Milk yield prediction and least-cost feed formulation for dairy cows",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
