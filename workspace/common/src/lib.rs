//! Platform-neutral core of the dairy feed planner.
//!
//! Shared by the browser frontend and the host binary: the model service's
//! payloads, form parsing, the result formatter, the page state reducer, the
//! two request pipelines and the dashboard seeder. Nothing here touches the
//! DOM or a socket; I/O enters through [`ModelService`] and [`ChartRenderer`].

pub mod dashboard;
pub mod error;
pub mod form;
pub mod format;
pub mod nutrient;
pub mod payload;
pub mod pipeline;
pub mod state;
pub mod tabs;
pub mod view;

pub use dashboard::{ChartConfig, ChartKind, ChartRenderer, ChartSpec, DashboardSeeder, Dataset, NoopRenderer};
pub use error::{ChartError, PipelineError, ServiceError, UnknownTab, ValidationError};
pub use form::{parse_float, FormSource};
pub use nutrient::NutrientStatus;
pub use payload::{
    decode_response, FeedAmounts, NutrientBalance, NutrientTable, OptimizeRequest, OptimizeResponse,
    Optimization, PredictRequest, PredictResponse, Prediction,
};
pub use pipeline::{
    run_optimize, run_predict, submit_optimize, submit_predict, ModelService, OPTIMIZE_ENDPOINT,
    PREDICT_ENDPOINT,
};
pub use state::{AppEvent, AppState, Effect, Panel, PanelSlot, PanelState, RequestSequence};
pub use tabs::{Tab, TabEffect, TabState};
pub use view::{FeedRow, Metric, NutrientRow, OptimizeView, PredictView};
