use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use common::{OPTIMIZE_ENDPOINT, PREDICT_ENDPOINT};
use serde_json::Value;
use tracing::{error, info, instrument};

use crate::model_client::RelayError;
use crate::schemas::{AppState, ErrorResponse};

/// Body that is not JSON gets the same envelope as a model-service failure.
fn invalid_body(path: &str, rejection: JsonRejection) -> Response {
    let message = rejection.body_text();
    error!(path, status = rejection.status().as_u16(), "Rejected request body: {}", message);
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new("INVALID_BODY", message))).into_response()
}

async fn relay(state: &AppState, path: &str, payload: Result<Json<Value>, JsonRejection>) -> Response {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => return invalid_body(path, rejection),
    };
    match state.model.relay(path, &body).await {
        Ok((status, answer)) => {
            info!(path, status = status.as_u16(), "Relayed model service answer");
            (status, Json(answer)).into_response()
        }
        Err(e) => {
            error!(path, error = %e, "Model service call failed");
            let code = match e {
                RelayError::Unreachable(_) => "UPSTREAM_UNREACHABLE",
                RelayError::TimedOut(_) => "UPSTREAM_TIMEOUT",
                RelayError::Unreadable { .. } => "UPSTREAM_UNREADABLE",
            };
            (StatusCode::BAD_GATEWAY, Json(ErrorResponse::new(code, e.to_string()))).into_response()
        }
    }
}

/// Predict milk yield for a ration
#[utoipa::path(
    post,
    path = "/api/predict",
    tag = "model",
    request_body = common::PredictRequest,
    responses(
        (status = 200, description = "Prediction computed", body = common::PredictResponse),
        (status = 400, description = "Rejected by the model service, or the body is not JSON", body = common::PredictResponse),
        (status = 502, description = "Model service unreachable", body = ErrorResponse)
    )
)]
#[instrument(skip(state, payload))]
pub async fn predict(State(state): State<AppState>, payload: Result<Json<Value>, JsonRejection>) -> Response {
    relay(&state, PREDICT_ENDPOINT, payload).await
}

/// Formulate the least-cost ration for a milk target
#[utoipa::path(
    post,
    path = "/api/optimize",
    tag = "model",
    request_body = common::OptimizeRequest,
    responses(
        (status = 200, description = "Formulation found", body = common::OptimizeResponse),
        (status = 400, description = "No feasible formulation, or the body is not JSON", body = common::OptimizeResponse),
        (status = 502, description = "Model service unreachable", body = ErrorResponse)
    )
)]
#[instrument(skip(state, payload))]
pub async fn optimize(State(state): State<AppState>, payload: Result<Json<Value>, JsonRejection>) -> Response {
    relay(&state, OPTIMIZE_ENDPOINT, payload).await
}
