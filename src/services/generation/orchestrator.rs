//! Task Orchestrator
//!
//! Runs the structured, translation, and analysis tasks concurrently and
//! aggregates their results into a [`GenerationBundle`].
//!
//! The batch is all-or-nothing: one task failing fails the whole cycle and
//! no partial result is surfaced. Translation is skipped entirely (and
//! resolves to an empty string) when no target language is set.

use tracing::{debug, error};

use prompt_studio_core::GenerationBundle;

use crate::services::generation::client::GenerationClient;
use crate::utils::error::AppResult;

/// Orchestrates a full generation cycle.
pub struct TaskOrchestrator {
    client: GenerationClient,
}

impl TaskOrchestrator {
    pub fn new(client: GenerationClient) -> Self {
        Self { client }
    }

    /// Run the three tasks concurrently and aggregate their results.
    pub async fn generate_all(
        &self,
        content: &str,
        target_language: &str,
    ) -> AppResult<GenerationBundle> {
        debug!(target_language, "starting generation cycle");

        let result = tokio::try_join!(
            self.client.structured(content),
            self.translation_or_skip(content, target_language),
            self.client.analyze(content),
        );

        let (structured, translation, analysis) = result.map_err(|e| {
            error!(error = %e, "generation cycle failed");
            e
        })?;

        Ok(GenerationBundle {
            description: structured.description,
            tags: structured.tags,
            translation,
            analysis,
        })
    }

    /// Translation task, short-circuited to an empty string when no target
    /// language is set. The provider is not called in that case.
    async fn translation_or_skip(
        &self,
        content: &str,
        target_language: &str,
    ) -> AppResult<String> {
        if target_language.trim().is_empty() {
            return Ok(String::new());
        }
        self.client.translate(content, target_language).await
    }
}
