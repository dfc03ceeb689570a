use thiserror::Error;

use crate::llm::LlmError;

/// Failure taxonomy for recipe generation.
///
/// Every variant is surfaced to HTTP callers as a 500 with the error message
/// in the response envelope; the variants exist so logs and tests can tell
/// the failure stages apart.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The call to the model provider failed before any usable output.
    #[error("model request failed: {0}")]
    Transport(#[from] LlmError),

    /// The model output was not parseable as JSON, even after extraction.
    #[error("model returned invalid recipe JSON: {0}")]
    MalformedResponse(String),

    /// The parsed JSON is missing required fields or has wrong field types.
    #[error("recipe failed validation: {0}")]
    SchemaViolation(String),
}
