//! Generation Client
//!
//! One chat-completion call per task: builds the task's system/user
//! message pair, forwards the config's sampling knobs (with the long-form
//! override where a task needs it), and post-processes the reply into a
//! typed [`GenerationOutput`].

use std::sync::Arc;

use tracing::debug;

use prompt_studio_core::{
    parse_tags, GenerationOutput, GenerationRequest, GenerationTask, StructuredContent,
};
use prompt_studio_llm::{ChatMessage, ChatProvider, RequestOptions};

use crate::services::generation::prompts;
use crate::utils::error::{AppError, AppResult};

/// Token ceiling forced for tasks that produce long replies, regardless of
/// the stored config.
const LONG_FORM_MAX_TOKENS: u32 = 4096;

/// Client for single-task generation calls.
pub struct GenerationClient {
    provider: Arc<dyn ChatProvider>,
}

impl GenerationClient {
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        Self { provider }
    }

    /// Generate a one-line description of the prompt.
    pub async fn describe(&self, content: &str) -> AppResult<String> {
        self.complete_task(GenerationTask::Description, content, "")
            .await
    }

    /// Generate up to five tags for the prompt.
    pub async fn tag(&self, content: &str) -> AppResult<Vec<String>> {
        let reply = self.complete_task(GenerationTask::Tags, content, "").await?;
        Ok(parse_tags(&reply))
    }

    /// Translate the prompt into the target language.
    pub async fn translate(&self, content: &str, target_language: &str) -> AppResult<String> {
        self.complete_task(GenerationTask::Translation, content, target_language)
            .await
    }

    /// Generate a usage analysis of the prompt.
    pub async fn analyze(&self, content: &str) -> AppResult<String> {
        self.complete_task(GenerationTask::Analysis, content, "")
            .await
    }

    /// Generate description + tags from a single JSON-mode call.
    ///
    /// An unparsable reply degrades to the placeholder instead of failing.
    pub async fn structured(&self, content: &str) -> AppResult<StructuredContent> {
        let reply = self
            .complete_task(GenerationTask::Structured, content, "")
            .await?;
        Ok(StructuredContent::from_model_reply(&reply))
    }

    /// Dispatch a [`GenerationRequest`] to the matching task method.
    ///
    /// `All` requests are composed by the orchestrator, not here.
    pub async fn generate(&self, request: &GenerationRequest) -> AppResult<GenerationOutput> {
        request.validate()?;
        match request.task {
            GenerationTask::Description => {
                self.describe(&request.content).await.map(GenerationOutput::Text)
            }
            GenerationTask::Tags => self.tag(&request.content).await.map(GenerationOutput::Tags),
            GenerationTask::Translation => self
                .translate(&request.content, &request.target_language)
                .await
                .map(GenerationOutput::Text),
            GenerationTask::Analysis => {
                self.analyze(&request.content).await.map(GenerationOutput::Text)
            }
            GenerationTask::Structured => self
                .structured(&request.content)
                .await
                .map(GenerationOutput::Structured),
            GenerationTask::All => Err(AppError::validation(
                "the 'all' task runs through the orchestrator",
            )),
        }
    }

    /// Shared plumbing: build messages, pick options, call the provider.
    async fn complete_task(
        &self,
        task: GenerationTask,
        content: &str,
        target_language: &str,
    ) -> AppResult<String> {
        let messages = vec![
            ChatMessage::system(prompts::system_prompt(task, target_language)),
            ChatMessage::user(content),
        ];
        let options = request_options(task);

        debug!(task = %task, model = self.provider.model(), "dispatching generation call");
        let reply = self.provider.complete(messages, options).await?;
        Ok(reply.trim().to_string())
    }
}

/// Per-task sampling overrides. Analysis and translation replies routinely
/// exceed the stored ceiling, so they force [`LONG_FORM_MAX_TOKENS`].
fn request_options(task: GenerationTask) -> RequestOptions {
    match task {
        GenerationTask::Analysis | GenerationTask::Translation => RequestOptions {
            max_tokens_override: Some(LONG_FORM_MAX_TOKENS),
            ..Default::default()
        },
        _ => RequestOptions::default(),
    }
}
