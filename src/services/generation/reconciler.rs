//! Result Reconciler
//!
//! Merges a completed [`GenerationBundle`] into the prompt form state.
//!
//! The merge is a pure function returning the next state in one step, so a
//! caller swapping its form state never exposes a half-written render.

use prompt_studio_core::GenerationBundle;

use crate::models::prompt::PromptFormState;

/// Apply a completed bundle to the prior form state.
///
/// - `ai_description` and `tags` come from the structured result.
/// - The translation lands under `target_language`, preserving entries for
///   other languages; nothing is written when the cycle ran without one.
/// - `interpretation` is overwritten unconditionally with the analysis.
pub fn apply(
    bundle: &GenerationBundle,
    prior: &PromptFormState,
    target_language: &str,
) -> PromptFormState {
    let mut next = prior.clone();
    next.ai_description = bundle.description.clone();
    next.tags = bundle.tags.clone();
    if !target_language.trim().is_empty() {
        next.translations
            .insert(target_language.to_string(), bundle.translation.clone());
    }
    next.interpretation = bundle.analysis.clone();
    next
}
