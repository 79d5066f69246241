//! LLM Types
//!
//! Configuration, message, and error types shared by the provider layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Model Configuration
// ============================================================================

/// A user-saved model configuration.
///
/// Serialized with camelCase field names to stay byte-compatible with the
/// persisted config blob (`apiKey`, `baseUrl`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelConfig {
    pub id: String,
    pub name: String,
    pub provider: String,
    pub model: String,
    pub api_key: String,
    pub base_url: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            provider: "openai".to_string(),
            model: String::new(),
            api_key: String::new(),
            base_url: String::new(),
            temperature: 0.7,
            max_tokens: 2048,
            is_active: false,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }
}

impl ModelConfig {
    /// Whether the config carries the credentials a request needs.
    pub fn has_credentials(&self) -> bool {
        !self.api_key.trim().is_empty() && !self.base_url.trim().is_empty()
    }

    /// The chat-completions endpoint derived from `base_url`.
    ///
    /// Accepts either a bare API root (`https://host/v1`) or a full
    /// endpoint; the suffix is appended only when missing.
    pub fn chat_completions_url(&self) -> String {
        let base = self.base_url.trim().trim_end_matches('/');
        if base.ends_with("/chat/completions") {
            base.to_string()
        } else {
            format!("{}/chat/completions", base)
        }
    }

    /// The model-listing endpoint derived from `base_url`, used for
    /// health checks.
    pub fn models_url(&self) -> String {
        let base = self.base_url.trim().trim_end_matches('/');
        let base = base.strip_suffix("/chat/completions").unwrap_or(base);
        format!("{}/models", base.trim_end_matches('/'))
    }

    /// Validate the configuration before it is saved.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("config name is required".to_string());
        }
        if self.model.trim().is_empty() {
            return Err("model id is required".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "temperature must be between 0 and 2, got {}",
                self.temperature
            ));
        }
        if self.max_tokens == 0 {
            return Err("max_tokens must be at least 1".to_string());
        }
        Ok(())
    }
}

// ============================================================================
// Messages
// ============================================================================

/// Role of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// A single role-tagged message in a chat-completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Per-request overrides for the numeric sampling knobs.
///
/// `None` means "use the value stored in the config". Tasks that need long
/// replies (analysis, translation) set a max-tokens override regardless of
/// the stored ceiling.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub temperature_override: Option<f32>,
    pub max_tokens_override: Option<u32>,
}

// ============================================================================
// Errors
// ============================================================================

/// Errors surfaced by the provider layer.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Network error: {message}")]
    NetworkError { message: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Rate limited: {message}")]
    RateLimited {
        message: String,
        retry_after: Option<u64>,
    },

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Model not found: {model}")]
    ModelNotFound { model: String },

    #[error("Server error: {message}")]
    ServerError {
        message: String,
        status: Option<u16>,
    },

    #[error("Parse error: {message}")]
    ParseError { message: String },

    #[error("{message}")]
    Other { message: String },
}

/// Result type alias for provider errors
pub type LlmResult<T> = Result<T, LlmError>;
