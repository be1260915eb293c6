//! Outbound text-generation collaborator.
//!
//! The feed service only depends on the [`FactGenerator`] trait, so the
//! batching, ordering and cleanup logic can be tested against a mock without
//! a running model endpoint. The production implementation talks to a local
//! Ollama server.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of a single generation call.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The request never completed, or the body could not be parsed.
    #[error("generation request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The endpoint answered with a non-success status.
    #[error("generation endpoint returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Opaque text-generation capability: prompt in, generated text out.
#[async_trait]
pub trait FactGenerator: Send + Sync {
    /// Generate text for `prompt`. No retry; the caller fails fast.
    async fn generate(&self, prompt: &str) -> Result<String, UpstreamError>;
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Ollama client for the non-streaming `/api/generate` endpoint.
#[derive(Debug, Clone)]
pub struct OllamaGenerator {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaGenerator {
    /// Create a client for the Ollama server at `base_url`.
    pub fn new(base_url: &str, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.into(),
        }
    }
}

#[async_trait]
impl FactGenerator for OllamaGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, UpstreamError> {
        let url = format!("{}/api/generate", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&GenerateRequest {
                model: &self.model,
                prompt,
                stream: false,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        let body: GenerateResponse = response.json().await?;
        Ok(body.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let generator = OllamaGenerator::new("http://localhost:11434/", "gemma2:2b");
        assert_eq!(generator.base_url, "http://localhost:11434");

        let generator = OllamaGenerator::new("http://localhost:11434", "gemma2:2b");
        assert_eq!(generator.base_url, "http://localhost:11434");
    }
}
