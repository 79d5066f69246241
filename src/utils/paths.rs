//! Cross-Platform Path Utilities
//!
//! Functions for resolving the application directory and config file.

use std::path::PathBuf;

use crate::utils::error::{AppError, AppResult};

/// Get the user's home directory
pub fn home_dir() -> AppResult<PathBuf> {
    dirs::home_dir().ok_or_else(|| AppError::config("Could not determine home directory"))
}

/// Get the Prompt Studio directory (~/.prompt-studio/)
pub fn prompt_studio_dir() -> AppResult<PathBuf> {
    Ok(home_dir()?.join(".prompt-studio"))
}

/// Get the model config store path (~/.prompt-studio/model-config.json)
pub fn config_store_path() -> AppResult<PathBuf> {
    Ok(prompt_studio_dir()?.join("model-config.json"))
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &PathBuf) -> AppResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Get the Prompt Studio directory, creating if it doesn't exist
pub fn ensure_prompt_studio_dir() -> AppResult<PathBuf> {
    let path = prompt_studio_dir()?;
    ensure_dir(&path)?;
    Ok(path)
}
