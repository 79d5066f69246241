//! Generation Pipeline Integration Tests
//!
//! Full generation cycles against the scripted in-memory provider:
//! orchestration policy, structured-reply degradation, and reconciliation.

use std::sync::Arc;

use prompt_studio::models::prompt::PromptFormState;
use prompt_studio::utils::error::AppError;
use prompt_studio_core::{
    GenerationOutput, GenerationRequest, GenerationTask, STRUCTURED_FALLBACK_DESCRIPTION,
};

use crate::support::{configured_store, pipeline_with, ScriptedProvider};

#[tokio::test]
async fn test_full_cycle_reconciles_form() {
    let dir = tempfile::tempdir().unwrap();
    let provider = Arc::new(ScriptedProvider::happy_path());
    let pipeline = pipeline_with(configured_store(&dir), provider.clone());

    let mut form = PromptFormState::with_content("some prompt");
    form.target_language = "en".to_string();
    form.name = "my prompt".to_string();

    let next = pipeline.run(&form).await.unwrap();

    assert_eq!(next.ai_description, "desc");
    assert_eq!(next.tags, vec!["t1", "t2"]);
    assert_eq!(next.translations.get("en").unwrap(), "translated");
    assert_eq!(next.interpretation, "analysis");
    // user-edited fields survive reconciliation
    assert_eq!(next.name, "my prompt");
    assert_eq!(next.content, "some prompt");
    assert_eq!(provider.call_count(), 3);
}

#[tokio::test]
async fn test_empty_target_language_skips_translation() {
    let dir = tempfile::tempdir().unwrap();
    let provider = Arc::new(ScriptedProvider::happy_path());
    let pipeline = pipeline_with(configured_store(&dir), provider.clone());

    let next = pipeline
        .run(&PromptFormState::with_content("some prompt"))
        .await
        .unwrap();

    assert!(next.translations.is_empty());
    assert!(!provider.translation_was_called());
    assert_eq!(provider.call_count(), 2);
}

#[tokio::test]
async fn test_one_failure_rejects_whole_batch() {
    let dir = tempfile::tempdir().unwrap();
    let provider = Arc::new(ScriptedProvider::with_failing_translation());
    let pipeline = pipeline_with(configured_store(&dir), provider);

    let mut form = PromptFormState::with_content("some prompt");
    form.target_language = "en".to_string();

    let err = pipeline.run(&form).await.unwrap_err();
    assert!(matches!(err, AppError::Llm(_)));
    // the caller's form was never reconciled
    assert!(form.translations.is_empty());
    assert!(form.ai_description.is_empty());
}

#[tokio::test]
async fn test_malformed_structured_reply_degrades() {
    let dir = tempfile::tempdir().unwrap();
    let provider = Arc::new(ScriptedProvider::with_structured_reply("not json"));
    let pipeline = pipeline_with(configured_store(&dir), provider);

    let next = pipeline
        .run(&PromptFormState::with_content("some prompt"))
        .await
        .unwrap();

    // degraded to the placeholder instead of failing the cycle
    assert_eq!(next.ai_description, STRUCTURED_FALLBACK_DESCRIPTION);
    assert!(next.tags.is_empty());
    assert_eq!(next.interpretation, "analysis");
}

#[tokio::test]
async fn test_fenced_structured_reply_parses() {
    let dir = tempfile::tempdir().unwrap();
    let provider = Arc::new(ScriptedProvider::with_structured_reply(
        "```json\n{\"description\":\"fenced\",\"tags\":[\"x\"]}\n```",
    ));
    let pipeline = pipeline_with(configured_store(&dir), provider);

    let next = pipeline
        .run(&PromptFormState::with_content("some prompt"))
        .await
        .unwrap();
    assert_eq!(next.ai_description, "fenced");
    assert_eq!(next.tags, vec!["x"]);
}

#[tokio::test]
async fn test_unconfigured_pipeline_refuses_to_run() {
    let dir = tempfile::tempdir().unwrap();
    let store =
        prompt_studio::storage::ConfigStore::open(dir.path().join("model-config.json")).unwrap();
    let provider = Arc::new(ScriptedProvider::happy_path());
    let pipeline = pipeline_with(store, provider.clone());

    let err = pipeline
        .run(&PromptFormState::with_content("some prompt"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotConfigured(_)));
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_single_task_translation() {
    let dir = tempfile::tempdir().unwrap();
    let provider = Arc::new(ScriptedProvider::happy_path());
    let pipeline = pipeline_with(configured_store(&dir), provider.clone());

    let request = GenerationRequest::new(GenerationTask::Translation, "some prompt")
        .with_target_language("ja");
    let output = pipeline.run_task(&request).await.unwrap();

    assert_eq!(output, GenerationOutput::Text("translated".to_string()));
    assert!(provider.translation_was_called());
}

#[tokio::test]
async fn test_all_task_returns_bundle() {
    let dir = tempfile::tempdir().unwrap();
    let provider = Arc::new(ScriptedProvider::happy_path());
    let pipeline = pipeline_with(configured_store(&dir), provider);

    let request =
        GenerationRequest::new(GenerationTask::All, "some prompt").with_target_language("en");
    let bundle = pipeline
        .run_task(&request)
        .await
        .unwrap()
        .into_bundle()
        .unwrap();

    assert_eq!(bundle.description, "desc");
    assert_eq!(bundle.translation, "translated");
    assert_eq!(bundle.analysis, "analysis");
}
