//! Model Config Store
//!
//! Handles reading and writing the locally persisted model configurations.
//!
//! The store owns the `{state: {configs, activeConfig}}` blob and the
//! single-active invariant: `set_active` clears the flag on every other
//! entry and mirrors the chosen record into `activeConfig`. The
//! `active_config()` resolver is the only read the generation pipeline
//! performs.

use std::fs;
use std::path::{Path, PathBuf};

use prompt_studio_llm::ModelConfig;

use crate::models::config::{
    ConfigStoreState, ModelConfigCreateRequest, ModelConfigUpdateRequest,
};
use crate::utils::error::{AppError, AppResult};
use crate::utils::paths::{config_store_path, ensure_prompt_studio_dir};

/// Store for user-managed model configurations
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    state: ConfigStoreState,
}

impl ConfigStore {
    /// Create a store at the default location, loading the existing blob
    /// or starting empty.
    pub fn new() -> AppResult<Self> {
        ensure_prompt_studio_dir()?;
        Self::open(config_store_path()?)
    }

    /// Create a store backed by an explicit file path.
    pub fn open(path: PathBuf) -> AppResult<Self> {
        let state = if path.exists() {
            Self::load_from_file(&path)?
        } else {
            ConfigStoreState::default()
        };
        Ok(Self { path, state })
    }

    /// Load the blob from a file
    fn load_from_file(path: &Path) -> AppResult<ConfigStoreState> {
        let content = fs::read_to_string(path)?;
        let state: ConfigStoreState = serde_json::from_str(&content)?;
        Ok(state)
    }

    /// Save the blob to a file with pretty formatting
    fn save_to_file(path: &Path, state: &ConfigStoreState) -> AppResult<()> {
        let content = serde_json::to_string_pretty(state)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Save the current state to disk
    pub fn save(&self) -> AppResult<()> {
        Self::save_to_file(&self.path, &self.state)
    }

    /// Reload the state from disk
    pub fn reload(&mut self) -> AppResult<()> {
        self.state = Self::load_from_file(&self.path)?;
        Ok(())
    }

    // ========================================================================
    // Config lifecycle
    // ========================================================================

    /// All saved configs
    pub fn list(&self) -> &[ModelConfig] {
        &self.state.state.configs
    }

    /// Add a new config from the settings form
    pub fn add(&mut self, request: ModelConfigCreateRequest) -> AppResult<ModelConfig> {
        let config = request.into_config();
        config.validate().map_err(AppError::validation)?;
        self.state.state.configs.push(config.clone());
        self.save()?;
        Ok(config)
    }

    /// Apply a partial update to an existing config
    pub fn update(
        &mut self,
        id: &str,
        request: ModelConfigUpdateRequest,
    ) -> AppResult<ModelConfig> {
        let slot = self
            .state
            .state
            .configs
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::not_found(format!("model config: {}", id)))?;

        // Apply to a copy; a rejected update must not touch the stored entry
        let mut updated = slot.clone();
        request.apply_to(&mut updated);
        updated.validate().map_err(AppError::validation)?;
        *slot = updated.clone();

        // Keep the active mirror in lockstep when the active entry changes
        if updated.is_active {
            self.state.state.active_config = Some(updated.clone());
        }
        self.save()?;
        Ok(updated)
    }

    /// Remove a config; clears the active mirror if it was the active one
    pub fn remove(&mut self, id: &str) -> AppResult<()> {
        let before = self.state.state.configs.len();
        self.state.state.configs.retain(|c| c.id != id);
        if self.state.state.configs.len() == before {
            return Err(AppError::not_found(format!("model config: {}", id)));
        }
        if self
            .state
            .state
            .active_config
            .as_ref()
            .is_some_and(|c| c.id == id)
        {
            self.state.state.active_config = None;
        }
        self.save()?;
        Ok(())
    }

    /// Mark one config active, clearing the flag on all others
    pub fn set_active(&mut self, id: &str) -> AppResult<ModelConfig> {
        if !self.state.state.configs.iter().any(|c| c.id == id) {
            return Err(AppError::not_found(format!("model config: {}", id)));
        }

        let mut active = None;
        for config in &mut self.state.state.configs {
            config.is_active = config.id == id;
            if config.is_active {
                active = Some(config.clone());
            }
        }

        // Checked above, so the clone is always present
        let active = active.ok_or_else(|| AppError::internal("active config vanished"))?;
        self.state.state.active_config = Some(active.clone());
        self.save()?;
        Ok(active)
    }

    // ========================================================================
    // Config Resolver
    // ========================================================================

    /// Resolve the active config for a generation cycle.
    ///
    /// Fails with `NotConfigured` when no config is active or the active
    /// entry is missing its API key or base URL.
    pub fn active_config(&self) -> AppResult<ModelConfig> {
        let config = self
            .state
            .state
            .active_config
            .as_ref()
            .ok_or_else(|| AppError::not_configured("no active model config"))?;

        if !config.has_credentials() {
            return Err(AppError::not_configured(
                "active model config is missing an API key or base URL",
            ));
        }
        Ok(config.clone())
    }
}
