//! OpenAI-compatible adapter for chat completions.
//!
//! Supports OpenAI API, Azure OpenAI, and local Ollama instances.
//! The model is chosen per call, so one adapter serves every task tier.

use crate::domain::{ChatMessage, DomainError};
use crate::ports::LlmPort;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

/// OpenAI-compatible LLM adapter.
///
/// Can be configured to work with:
/// - OpenAI API (api.openai.com)
/// - Azure OpenAI
/// - Ollama (localhost)
/// - Any OpenAI-compatible API
pub struct OpenAiAdapter {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
}

impl OpenAiAdapter {
    /// Create a new OpenAI adapter.
    ///
    /// # Arguments
    /// * `api_url` - API endpoint (e.g., "https://api.openai.com/v1/chat/completions")
    /// * `api_key` - API key; when `None`, every call fails with `MissingCredential`
    /// * `timeout` - Per-request timeout
    pub fn new(
        api_url: String,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Llm(format!("HTTP client: {}", e)))?;
        Ok(Self {
            client,
            api_url,
            api_key,
        })
    }
}

/// OpenAI API request structure.
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

/// OpenAI API response structure.
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait::async_trait]
impl LlmPort for OpenAiAdapter {
    async fn complete(
        &self,
        model: &str,
        messages: &[ChatMessage],
    ) -> Result<String, DomainError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(DomainError::MissingCredential("OPENAI"))?;

        info!(model, messages = messages.len(), "sending completion request");

        let request = ChatRequest { model, messages };

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::Llm(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "LLM API returned error");
            return Err(DomainError::Llm(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Llm(format!("Failed to parse API response: {}", e)))?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::Llm("No response choices returned".to_string()))?
            .message
            .content
            .unwrap_or_default();

        debug!(model, raw_len = content.len(), "received completion");

        Ok(content)
    }
}
