//! Prompt Studio Core
//!
//! Foundation types shared across the Prompt Studio workspace: the
//! generation task/result model and the core error type. Kept
//! dependency-light (serde + thiserror) so every member crate can build
//! on it.

pub mod error;
pub mod task;

// Re-export main types
pub use error::{CoreError, CoreResult};
pub use task::{
    parse_tags, GenerationBundle, GenerationOutput, GenerationRequest, GenerationTask,
    StructuredContent, MAX_TAGS, STRUCTURED_FALLBACK_DESCRIPTION,
};
