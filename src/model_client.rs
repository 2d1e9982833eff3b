use std::time::Duration;

use async_trait::async_trait;
use axum::http::StatusCode;
use common::{
    decode_response, ModelService, OptimizeRequest, OptimizeResponse, PredictRequest, PredictResponse,
    ServiceError, OPTIMIZE_ENDPOINT, PREDICT_ENDPOINT,
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// Why a relayed call produced no usable answer.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("model service unreachable: {0}")]
    Unreachable(reqwest::Error),
    #[error("model service timed out: {0}")]
    TimedOut(reqwest::Error),
    #[error("model service returned a non-JSON response (HTTP {status})")]
    Unreadable { status: u16 },
}

/// HTTP client for the model service.
///
/// Cloning is cheap: the underlying `reqwest::Client` shares one connection pool.
#[derive(Debug, Clone)]
pub struct ModelClient {
    client: reqwest::Client,
    base_url: String,
}

impl ModelClient {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post_raw<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(u16, String), reqwest::Error> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "POST to model service");

        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        debug!(url = %url, status, bytes = text.len(), "Model service answered");
        Ok((status, text))
    }

    /// Forwards a JSON body to `path` and returns the model service's status and JSON body as-is.
    #[instrument(skip(self, body), fields(upstream = %self.base_url))]
    pub async fn relay(&self, path: &str, body: &Value) -> Result<(StatusCode, Value), RelayError> {
        let (status, text) = self.post_raw(path, body).await.map_err(|e| {
            if e.is_timeout() {
                RelayError::TimedOut(e)
            } else {
                RelayError::Unreachable(e)
            }
        })?;
        let json: Value = serde_json::from_str(&text).map_err(|e| {
            warn!(status, error = %e, "Model service body is not JSON");
            RelayError::Unreadable { status }
        })?;
        let status = StatusCode::from_u16(status).map_err(|_| RelayError::Unreadable { status })?;
        Ok((status, json))
    }

    /// Whether anything answers at the base URL. Any HTTP status counts.
    pub async fn is_reachable(&self) -> bool {
        match self.client.get(&self.base_url).send().await {
            Ok(response) => {
                debug!(status = response.status().as_u16(), "Model service reachable");
                true
            }
            Err(e) => {
                warn!(upstream = %self.base_url, error = %e, "Model service unreachable");
                false
            }
        }
    }

    async fn call<B, T>(&self, path: &str, body: &B) -> Result<T, ServiceError>
    where
        B: Serialize,
        T: for<'de> serde::Deserialize<'de>,
    {
        let (status, text) = self
            .post_raw(path, body)
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;
        decode_response(status, &text)
    }
}

#[async_trait(?Send)]
impl ModelService for ModelClient {
    async fn predict(&self, request: &PredictRequest) -> Result<PredictResponse, ServiceError> {
        self.call(PREDICT_ENDPOINT, request).await
    }

    async fn optimize(&self, request: &OptimizeRequest) -> Result<OptimizeResponse, ServiceError> {
        self.call(OPTIMIZE_ENDPOINT, request).await
    }
}
