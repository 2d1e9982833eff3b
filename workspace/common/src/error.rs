use thiserror::Error;

/// A form field that could not be turned into a finite number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be a number (got \"{raw}\")")]
    NotANumber { field: &'static str, raw: String },
}

/// Failures reported by a [`crate::ModelService`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The request never produced a response (network down, CORS, timeout).
    #[error("{0}")]
    Transport(String),

    /// Non-OK status whose body was not a response envelope.
    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The service answered `success: false`.
    #[error("{0}")]
    Rejected(String),

    /// `success: true` but a numeric field was absent.
    #[error("response is missing `{0}`")]
    IncompletePayload(&'static str),
}

/// Everything that can end a submission without a result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl PipelineError {
    /// Inline text shown in the results panel.
    pub fn display_message(&self) -> String {
        format!("Error: {}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tab `{0}`")]
pub struct UnknownTab(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("chart `{element_id}` failed to render: {reason}")]
pub struct ChartError {
    pub element_id: String,
    pub reason: String,
}
