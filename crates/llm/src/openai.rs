//! OpenAI-Compatible Provider
//!
//! Implementation of the ChatProvider trait for any endpoint that speaks
//! the OpenAI chat-completions dialect. The endpoint and credentials come
//! entirely from the active [`ModelConfig`]; nothing is hardcoded to the
//! official API host.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use super::http_client::build_http_client;
use super::provider::{missing_api_key_error, parse_http_error, ChatProvider};
use super::types::{ChatMessage, LlmError, LlmResult, ModelConfig, RequestOptions};

/// Provider for OpenAI-chat-completions compatible endpoints.
pub struct OpenAiCompatProvider {
    config: ModelConfig,
    client: reqwest::Client,
}

impl OpenAiCompatProvider {
    /// Create a new provider with the given configuration.
    pub fn new(config: ModelConfig) -> Self {
        let client = build_http_client();
        Self { config, client }
    }

    /// Build the request body for the API.
    fn build_request_body(
        &self,
        messages: &[ChatMessage],
        options: &RequestOptions,
    ) -> serde_json::Value {
        serde_json::json!({
            "model": self.config.model,
            "messages": messages,
            "temperature": options
                .temperature_override
                .unwrap_or(self.config.temperature),
            "max_tokens": options
                .max_tokens_override
                .unwrap_or(self.config.max_tokens),
        })
    }

    /// Extract the reply text from a parsed response.
    fn extract_content(&self, response: ChatCompletionResponse) -> LlmResult<String> {
        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .ok_or_else(|| LlmError::ParseError {
                message: "response contained no message content".to_string(),
            })
    }
}

#[async_trait]
impl ChatProvider for OpenAiCompatProvider {
    fn name(&self) -> &'static str {
        "openai-compatible"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        options: RequestOptions,
    ) -> LlmResult<String> {
        if self.config.api_key.trim().is_empty() {
            return Err(missing_api_key_error(self.name()));
        }

        let body = self.build_request_body(&messages, &options);
        let url = self.config.chat_completions_url();
        debug!(model = %self.config.model, %url, "sending chat completion request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let body_text = response.text().await.map_err(|e| LlmError::NetworkError {
            message: e.to_string(),
        })?;

        if status != 200 {
            warn!(status, "chat completion request failed");
            return Err(parse_http_error(status, &body_text, self.name()));
        }

        let parsed: ChatCompletionResponse =
            serde_json::from_str(&body_text).map_err(|e| LlmError::ParseError {
                message: format!("Failed to parse response: {}", e),
            })?;

        self.extract_content(parsed)
    }

    async fn health_check(&self) -> LlmResult<()> {
        if self.config.api_key.trim().is_empty() {
            return Err(missing_api_key_error(self.name()));
        }

        // List models to verify the endpoint and API key
        let response = self
            .client
            .get(self.config.models_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .send()
            .await
            .map_err(|e| LlmError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        if status == 200 {
            Ok(())
        } else if status == 401 {
            Err(LlmError::AuthenticationFailed {
                message: "Invalid API key".to_string(),
            })
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(parse_http_error(status, &body, self.name()))
        }
    }

    fn config(&self) -> &ModelConfig {
        &self.config
    }
}

/// Chat-completions response format (the subset we consume)
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}
