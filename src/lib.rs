//! Prompt Studio
//!
//! The AI content-generation core of the Prompt Studio admin: resolves the
//! user's active model configuration, drives multi-task content generation
//! against an OpenAI-compatible endpoint, and reconciles the results into
//! the prompt form state.
//!
//! Layout follows the workspace convention: `models` for serde data
//! structures, `storage` for the local config store, `services` for
//! business logic, `utils` for errors and paths.

pub mod models;
pub mod services;
pub mod storage;
pub mod utils;
