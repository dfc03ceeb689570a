//! LLM provider abstraction for recipe generation.
//!
//! A trait-based seam over the external text-generation API so the
//! generation algorithm can run against the real provider in production and
//! a deterministic fake in tests.

mod fake;
mod gemini;

pub use fake::FakeProvider;
pub use gemini::GeminiProvider;

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for LLM operations.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// Trait for LLM providers.
///
/// Implementations are stateless and thread-safe; a provider makes the API
/// call and returns the model's raw text response.
#[async_trait]
pub trait LlmProvider: Send + Sync + fmt::Debug {
    /// Send a prompt to the model and await the full text response.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;

    /// Provider name (e.g., "gemini", "fake").
    fn provider_name(&self) -> &'static str;

    /// Model name (e.g., "gemini-pro").
    fn model_name(&self) -> &str;
}

/// Build a provider from environment variables.
///
/// - `SKILLET_PROVIDER`: "gemini" (default) | "fake"
/// - `SKILLET_MODEL`: model name override
/// - `GEMINI_API_KEY`: API key, required for the gemini provider
pub fn create_provider_from_env() -> Result<Box<dyn LlmProvider>, LlmError> {
    let provider = std::env::var("SKILLET_PROVIDER").unwrap_or_else(|_| "gemini".to_string());

    match provider.as_str() {
        "gemini" => {
            let api_key = std::env::var("GEMINI_API_KEY")
                .map_err(|_| LlmError::NotConfigured("GEMINI_API_KEY not set".to_string()))?;
            let model =
                std::env::var("SKILLET_MODEL").unwrap_or_else(|_| "gemini-pro".to_string());
            Ok(Box::new(GeminiProvider::new(api_key, model)))
        }
        "fake" => Ok(Box::new(FakeProvider::default())),
        other => Err(LlmError::NotConfigured(format!(
            "Unknown provider: {}",
            other
        ))),
    }
}
