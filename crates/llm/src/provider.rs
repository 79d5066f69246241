//! Chat Provider Trait
//!
//! Defines the common interface for chat-completion providers.

use async_trait::async_trait;

use super::types::{ChatMessage, LlmError, LlmResult, ModelConfig, RequestOptions};

/// Trait implemented by every chat-completion provider.
///
/// Provides a unified interface for:
/// - Single-turn completions (complete)
/// - Health checking
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Returns the provider name for identification.
    fn name(&self) -> &'static str;

    /// Returns the current model being used.
    fn model(&self) -> &str;

    /// Send the messages and return the assistant's reply text.
    ///
    /// # Arguments
    /// * `messages` - System and user messages for this request
    /// * `options` - Per-request overrides for temperature / max tokens
    ///
    /// # Returns
    /// The content of `choices[0].message`.
    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        options: RequestOptions,
    ) -> LlmResult<String>;

    /// Check if the provider is reachable and the API key is valid.
    async fn health_check(&self) -> LlmResult<()>;

    /// Get the configuration for this provider.
    fn config(&self) -> &ModelConfig;
}

/// Helper function to create an error for missing API key
pub fn missing_api_key_error(provider: &str) -> LlmError {
    LlmError::AuthenticationFailed {
        message: format!("API key not configured for {}", provider),
    }
}

/// Helper function to parse HTTP error status codes
pub fn parse_http_error(status: u16, body: &str, provider: &str) -> LlmError {
    match status {
        401 => LlmError::AuthenticationFailed {
            message: format!("{}: Invalid API key", provider),
        },
        403 => LlmError::AuthenticationFailed {
            message: format!("{}: Access denied", provider),
        },
        404 => LlmError::ModelNotFound {
            model: body.to_string(),
        },
        429 => LlmError::RateLimited {
            message: body.to_string(),
            retry_after: None,
        },
        400 => LlmError::InvalidRequest {
            message: body.to_string(),
        },
        500..=599 => LlmError::ServerError {
            message: body.to_string(),
            status: Some(status),
        },
        _ => LlmError::Other {
            message: format!("HTTP {}: {}", status, body),
        },
    }
}
