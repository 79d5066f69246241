//! Generation Pipeline
//!
//! The multi-task AI content-generation flow: resolve the active model
//! config, run the structured/translation/analysis tasks concurrently,
//! and reconcile the results into the prompt form state.
//!
//! Per invocation the pipeline moves `Idle -> Generating -> Idle`; a busy
//! flag blocks re-entrant invocations while a cycle is in flight. There is
//! no cancellation: a dispatched cycle runs to completion or failure.

pub mod client;
pub mod orchestrator;
pub mod prompts;
pub mod reconciler;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::info;

use prompt_studio_core::{GenerationOutput, GenerationRequest, GenerationTask};
use prompt_studio_llm::{ChatProvider, ModelConfig, OpenAiCompatProvider};

use crate::models::prompt::PromptFormState;
use crate::storage::ConfigStore;
use crate::utils::error::{AppError, AppResult};

pub use client::GenerationClient;
pub use orchestrator::TaskOrchestrator;

/// Where the pipeline currently is in its per-invocation state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationPhase {
    Idle,
    Generating,
}

/// Builds a provider for a resolved config. Swappable so tests can inject
/// an in-memory provider.
pub type ProviderFactory = dyn Fn(&ModelConfig) -> Arc<dyn ChatProvider> + Send + Sync;

/// Drives full generation cycles against the active model config.
pub struct GenerationPipeline {
    store: ConfigStore,
    factory: Box<ProviderFactory>,
    busy: AtomicBool,
}

impl GenerationPipeline {
    /// Create a pipeline over the given config store, using the real
    /// OpenAI-compatible provider.
    pub fn new(store: ConfigStore) -> Self {
        Self::with_provider_factory(
            store,
            Box::new(|config| Arc::new(OpenAiCompatProvider::new(config.clone()))),
        )
    }

    /// Create a pipeline with a custom provider factory.
    pub fn with_provider_factory(store: ConfigStore, factory: Box<ProviderFactory>) -> Self {
        Self {
            store,
            factory,
            busy: AtomicBool::new(false),
        }
    }

    /// Current phase of the state machine.
    pub fn phase(&self) -> GenerationPhase {
        if self.busy.load(Ordering::SeqCst) {
            GenerationPhase::Generating
        } else {
            GenerationPhase::Idle
        }
    }

    /// Whether a cycle is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// The underlying config store (settings form reads).
    pub fn config_store(&self) -> &ConfigStore {
        &self.store
    }

    /// The underlying config store (settings form writes).
    pub fn config_store_mut(&mut self) -> &mut ConfigStore {
        &mut self.store
    }

    /// Run a full generation cycle for the given form and return the next
    /// form state.
    ///
    /// Fails with `Validation` when the content is empty or a cycle is
    /// already running, `NotConfigured` when no usable config is active,
    /// and a provider error when any of the three tasks fails. On failure
    /// the prior form state is untouched.
    pub async fn run(&self, form: &PromptFormState) -> AppResult<PromptFormState> {
        let _busy = self.begin()?;

        if form.content.trim().is_empty() {
            return Err(AppError::validation("prompt content is required"));
        }

        let orchestrator = TaskOrchestrator::new(self.client()?);
        let bundle = orchestrator
            .generate_all(&form.content, &form.target_language)
            .await?;

        info!("generation cycle succeeded");
        Ok(reconciler::apply(&bundle, form, &form.target_language))
    }

    /// Run a single task (the per-field buttons in the admin).
    ///
    /// `All` composes the full bundle through the orchestrator without
    /// touching form state; reconciliation stays with the caller.
    pub async fn run_task(&self, request: &GenerationRequest) -> AppResult<GenerationOutput> {
        let _busy = self.begin()?;
        request.validate()?;

        let client = self.client()?;
        match request.task {
            GenerationTask::All => TaskOrchestrator::new(client)
                .generate_all(&request.content, &request.target_language)
                .await
                .map(GenerationOutput::Bundle),
            _ => client.generate(request).await,
        }
    }

    /// Resolve the active config and build a client for this cycle.
    fn client(&self) -> AppResult<GenerationClient> {
        let config = self.store.active_config()?;
        let provider = (self.factory)(&config);
        Ok(GenerationClient::new(provider))
    }

    /// Flip the busy flag, rejecting re-entry while a cycle is in flight.
    fn begin(&self) -> AppResult<BusyGuard<'_>> {
        if self.busy.swap(true, Ordering::SeqCst) {
            return Err(AppError::validation(
                "a generation cycle is already running",
            ));
        }
        Ok(BusyGuard(&self.busy))
    }
}

/// Resets the busy flag on every exit path, success or failure.
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
