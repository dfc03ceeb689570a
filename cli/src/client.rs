//! HTTP client for the generation endpoint.

use async_trait::async_trait;
use serde::Deserialize;
use skillet_core::{GenerationRequest, Recipe};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server error ({status}): {message}")]
    Api { status: u16, message: String },
}

/// Trait for the generation backend, enabling stubs in tests.
#[async_trait]
pub trait GenerateBackend {
    /// Issue one generation request and await the settled result.
    async fn generate(&self, request: &GenerationRequest) -> Result<Recipe, ClientError>;
}

/// Error envelope returned by the server on failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Backend that talks to a running skillet server.
pub struct HttpGenerateClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpGenerateClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Unauthenticated liveness check.
    pub async fn ping(&self) -> Result<String, ClientError> {
        #[derive(Debug, Deserialize)]
        struct PingBody {
            message: String,
        }

        let response = self
            .client
            .get(format!("{}/api/test/unauthed-ping", self.base_url))
            .send()
            .await?;

        let body: PingBody = response.json().await?;
        Ok(body.message)
    }
}

#[async_trait]
impl GenerateBackend for HttpGenerateClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<Recipe, ClientError> {
        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(request)
            .send()
            .await?;

        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        // Failure bodies carry `{"error": ...}`; fall back to the raw body
        // if the envelope itself is broken.
        let body = response.text().await?;
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|e| e.error)
            .unwrap_or(body);

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
