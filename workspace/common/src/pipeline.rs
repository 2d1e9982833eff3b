//! The two request pipelines: form in, view model or inline error out.

use async_trait::async_trait;

use crate::error::{PipelineError, ServiceError};
use crate::form::FormSource;
use crate::payload::{OptimizeRequest, OptimizeResponse, PredictRequest, PredictResponse};
use crate::view::{OptimizeView, PredictView};

pub const PREDICT_ENDPOINT: &str = "/api/predict";
pub const OPTIMIZE_ENDPOINT: &str = "/api/optimize";

/// The remote model service. Implemented over gloo-net in the browser and
/// over reqwest in the host binary.
///
/// Implementations return the decoded envelope even for `success: false`;
/// only transport and decoding problems are errors here.
#[async_trait(?Send)]
pub trait ModelService {
    async fn predict(&self, request: &PredictRequest) -> Result<PredictResponse, ServiceError>;

    async fn optimize(&self, request: &OptimizeRequest) -> Result<OptimizeResponse, ServiceError>;
}

pub async fn run_predict<S>(service: &S, request: PredictRequest) -> Result<PredictView, PipelineError>
where
    S: ModelService + ?Sized,
{
    request.validate()?;
    tracing::info!(?request, "requesting prediction");
    let prediction = service.predict(&request).await?.into_result()?;
    tracing::debug!(milk_yield = prediction.milk_yield, "prediction received");
    Ok(PredictView::from(&prediction))
}

pub async fn run_optimize<S>(service: &S, request: OptimizeRequest) -> Result<OptimizeView, PipelineError>
where
    S: ModelService + ?Sized,
{
    request.validate()?;
    tracing::info!(?request, "requesting optimization");
    let optimization = service.optimize(&request).await?.into_result()?;
    tracing::debug!(
        total_cost = optimization.total_cost,
        nutrients = optimization.nutrients.len(),
        "optimization received"
    );
    Ok(OptimizeView::from(&optimization))
}

/// Validates the form and runs the predict pipeline. Invalid input never
/// reaches the service.
pub async fn submit_predict<S, F>(service: &S, form: &F) -> Result<PredictView, PipelineError>
where
    S: ModelService + ?Sized,
    F: FormSource + ?Sized,
{
    let request = PredictRequest::from_form(form)?;
    run_predict(service, request).await
}

pub async fn submit_optimize<S, F>(service: &S, form: &F) -> Result<OptimizeView, PipelineError>
where
    S: ModelService + ?Sized,
    F: FormSource + ?Sized,
{
    let request = OptimizeRequest::from_form(form)?;
    run_optimize(service, request).await
}
