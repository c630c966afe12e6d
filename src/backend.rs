use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::config::LabConfig;
use crate::error::{GenerationError, LabError};
use crate::model::GenerationRequest;

/// Anything that can turn a generation request into raw recipe text
#[async_trait]
pub trait RecipeBackend: Send + Sync {
    /// Get the backend name (e.g., "http")
    fn backend_name(&self) -> &str;

    /// Send one request and return the raw generated text
    async fn request_recipe(&self, request: &GenerationRequest) -> Result<String, GenerationError>;
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    recipe: String,
}

/// Talks to the generation endpoint over HTTP
pub struct HttpBackend {
    client: Client,
    endpoint: String,
}

impl HttpBackend {
    /// Create a backend with no overall request timeout
    pub fn new(endpoint: impl Into<String>) -> Self {
        HttpBackend {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Create a backend whose requests give up after `timeout`
    pub fn with_timeout(
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LabError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(HttpBackend {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Create a backend from configuration
    pub fn from_config(config: &LabConfig) -> Result<Self, LabError> {
        match config.request_timeout() {
            Some(timeout) => Self::with_timeout(&config.endpoint, timeout),
            None => Ok(Self::new(&config.endpoint)),
        }
    }
}

#[async_trait]
impl RecipeBackend for HttpBackend {
    fn backend_name(&self) -> &str {
        "http"
    }

    async fn request_recipe(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;

        // Status check before attempting to parse JSON
        let status = response.status();
        if !status.is_success() {
            debug!("Generation endpoint answered {}", status);
            return Err(GenerationError::Status(status));
        }

        let body = response.text().await?;
        let parsed: GenerateResponse = serde_json::from_str(&body)?;
        debug!("Received {} bytes of recipe text", parsed.recipe.len());

        Ok(parsed.recipe)
    }
}
