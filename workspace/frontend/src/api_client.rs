use async_trait::async_trait;
use common::{
    decode_response, ModelService, OptimizeRequest, OptimizeResponse, PredictRequest, PredictResponse,
    ServiceError, OPTIMIZE_ENDPOINT, PREDICT_ENDPOINT,
};
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::settings;

/// POST a JSON body and decode the JSON answer.
///
/// The model service answers failures with a non-OK status *and* a
/// `{success: false, error}` body, so the body is decoded whatever the
/// status; the status only matters when the body is not JSON.
pub async fn post<T, B>(endpoint: &str, body: &B) -> Result<T, ServiceError>
where
    T: for<'de> Deserialize<'de>,
    B: Serialize,
{
    let url = settings::get_settings().api_url(endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .json(body)
        .map_err(|e| {
            let error_msg = format!("Failed to serialize request: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            ServiceError::Transport(error_msg)
        })?
        .send()
        .await
        .map_err(|e| {
            log::error!("POST {} - Request failed: {}", endpoint, e);
            ServiceError::Transport(e.to_string())
        })?;

    let status = response.status();
    if !response.ok() {
        log::warn!("POST {} - Non-OK response: {}", endpoint, status);
    }

    log::trace!("POST {} - Response received, parsing JSON", endpoint);
    let text = response.text().await.map_err(|e| {
        let error_msg = format!("Failed to read response: {}", e);
        log::error!("POST {} - {}", endpoint, error_msg);
        ServiceError::Transport(error_msg)
    })?;

    let decoded = decode_response(status, &text).map_err(|e| {
        log::error!("POST {} - {}", endpoint, e);
        e
    })?;

    log::info!("POST {} - Done ({})", endpoint, status);
    Ok(decoded)
}

/// The model service reached through the browser's fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HttpModelService;

#[async_trait(?Send)]
impl ModelService for HttpModelService {
    async fn predict(&self, request: &PredictRequest) -> Result<PredictResponse, ServiceError> {
        post(PREDICT_ENDPOINT, request).await
    }

    async fn optimize(&self, request: &OptimizeRequest) -> Result<OptimizeResponse, ServiceError> {
        post(OPTIMIZE_ENDPOINT, request).await
    }
}
