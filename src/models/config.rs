//! Model Configuration Store Models
//!
//! The persisted blob shape and the create/update request types for the
//! settings form.
//!
//! The blob keeps the `{ "state": { "configs": [...], "activeConfig":
//! {...} } }` nesting of the source system so a config written by either
//! side reads back identically.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use prompt_studio_llm::ModelConfig;

/// Interior of the persisted blob.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// All saved configs. At most one has `is_active == true`.
    #[serde(default)]
    pub configs: Vec<ModelConfig>,
    /// Mirror of the active entry, kept in lockstep by the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_config: Option<ModelConfig>,
}

/// Top-level persisted blob.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigStoreState {
    pub state: ConfigState,
}

/// Request to create a new model config from the settings form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelConfigCreateRequest {
    pub name: String,
    #[serde(default = "default_provider")]
    pub provider: String,
    pub model: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_provider() -> String {
    "openai".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    2048
}

impl ModelConfigCreateRequest {
    /// Build the stored record: fresh id, timestamps, inactive.
    pub fn into_config(self) -> ModelConfig {
        let now = Utc::now().to_rfc3339();
        ModelConfig {
            id: Uuid::new_v4().to_string(),
            name: self.name,
            provider: self.provider,
            model: self.model,
            api_key: self.api_key,
            base_url: self.base_url,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            is_active: false,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// Partial update applied to an existing config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelConfigUpdateRequest {
    pub name: Option<String>,
    pub provider: Option<String>,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

impl ModelConfigUpdateRequest {
    /// Apply the update in place, refreshing `updated_at`.
    pub fn apply_to(self, config: &mut ModelConfig) {
        if let Some(name) = self.name {
            config.name = name;
        }
        if let Some(provider) = self.provider {
            config.provider = provider;
        }
        if let Some(model) = self.model {
            config.model = model;
        }
        if let Some(api_key) = self.api_key {
            config.api_key = api_key;
        }
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(temperature) = self.temperature {
            config.temperature = temperature;
        }
        if let Some(max_tokens) = self.max_tokens {
            config.max_tokens = max_tokens;
        }
        config.updated_at = Utc::now().to_rfc3339();
    }
}
