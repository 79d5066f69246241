//! Shared Test Fixtures
//!
//! An in-memory scripted provider and config-store builders used across
//! the integration tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use prompt_studio::models::config::ModelConfigCreateRequest;
use prompt_studio::services::generation::{GenerationPipeline, ProviderFactory};
use prompt_studio::storage::ConfigStore;
use prompt_studio_llm::{ChatMessage, ChatProvider, LlmError, LlmResult, ModelConfig, RequestOptions};

/// What the scripted provider should do for one task family.
#[derive(Clone)]
pub enum Script {
    Reply(String),
    Fail,
}

/// In-memory provider that answers by task, recognized from the system
/// prompt, and records every call it receives.
pub struct ScriptedProvider {
    config: ModelConfig,
    pub calls: Mutex<Vec<String>>,
    structured: Script,
    translation: Script,
    analysis: Script,
}

impl ScriptedProvider {
    pub fn happy_path() -> Self {
        Self {
            config: ModelConfig::default(),
            calls: Mutex::new(Vec::new()),
            structured: Script::Reply(
                r#"{"description":"desc","tags":["t1","t2"]}"#.to_string(),
            ),
            translation: Script::Reply("translated".to_string()),
            analysis: Script::Reply("analysis".to_string()),
        }
    }

    pub fn with_structured_reply(reply: &str) -> Self {
        Self {
            structured: Script::Reply(reply.to_string()),
            ..Self::happy_path()
        }
    }

    pub fn with_failing_translation() -> Self {
        Self {
            translation: Script::Fail,
            ..Self::happy_path()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn translation_was_called(&self) -> bool {
        self.calls.lock().unwrap().iter().any(|c| c.contains("翻译"))
    }

    fn run_script(script: &Script) -> LlmResult<String> {
        match script {
            Script::Reply(reply) => Ok(reply.clone()),
            Script::Fail => Err(LlmError::ServerError {
                message: "scripted failure".to_string(),
                status: Some(500),
            }),
        }
    }
}

#[async_trait]
impl ChatProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn model(&self) -> &str {
        "test-model"
    }

    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        _options: RequestOptions,
    ) -> LlmResult<String> {
        let system = messages
            .first()
            .map(|m| m.content.clone())
            .unwrap_or_default();
        self.calls.lock().unwrap().push(system.clone());

        if system.contains("JSON") {
            Self::run_script(&self.structured)
        } else if system.contains("翻译") {
            Self::run_script(&self.translation)
        } else if system.contains("分析") {
            Self::run_script(&self.analysis)
        } else {
            Ok("a reply".to_string())
        }
    }

    async fn health_check(&self) -> LlmResult<()> {
        Ok(())
    }

    fn config(&self) -> &ModelConfig {
        &self.config
    }
}

/// A valid create request for the settings form.
pub fn create_request(name: &str) -> ModelConfigCreateRequest {
    ModelConfigCreateRequest {
        name: name.to_string(),
        provider: "openai".to_string(),
        model: "gpt-4o-mini".to_string(),
        api_key: "sk-test".to_string(),
        base_url: "https://api.openai.com/v1".to_string(),
        temperature: 0.7,
        max_tokens: 2048,
    }
}

/// A store in `dir` with one active, fully credentialed config.
pub fn configured_store(dir: &tempfile::TempDir) -> ConfigStore {
    let mut store = ConfigStore::open(dir.path().join("model-config.json")).unwrap();
    let config = store.add(create_request("default")).unwrap();
    store.set_active(&config.id).unwrap();
    store
}

/// A pipeline wired to the given scripted provider.
pub fn pipeline_with(store: ConfigStore, provider: Arc<ScriptedProvider>) -> GenerationPipeline {
    let factory: Box<ProviderFactory> =
        Box::new(move |_| provider.clone() as Arc<dyn ChatProvider>);
    GenerationPipeline::with_provider_factory(store, factory)
}
