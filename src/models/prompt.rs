//! Prompt Form Models
//!
//! The in-memory form state the admin edits and the reconciler writes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The prompt form as edited in the admin.
///
/// Mutated by user keystrokes and, after a generation cycle completes, by
/// the result reconciler in a single step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptFormState {
    pub name: String,
    pub ai_description: String,
    pub content: String,
    /// Keyed by language code; each generation cycle writes at most the
    /// current target language's entry.
    #[serde(default)]
    pub translations: BTreeMap<String, String>,
    pub interpretation: String,
    pub source: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category: String,
    pub target_language: String,
}

impl PromptFormState {
    /// Convenience constructor for a draft around existing prompt text.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }
}
