//! Data Models
//!
//! Serde data structures for the config store and the prompt form.

pub mod config;
pub mod prompt;

pub use config::{ConfigState, ConfigStoreState, ModelConfigCreateRequest, ModelConfigUpdateRequest};
pub use prompt::PromptFormState;
