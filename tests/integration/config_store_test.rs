//! Config Store Integration Tests
//!
//! Lifecycle and resolver behavior of the locally persisted model configs.

use prompt_studio::models::config::ModelConfigUpdateRequest;
use prompt_studio::storage::ConfigStore;
use prompt_studio::utils::error::AppError;

use crate::support::create_request;

#[test]
fn test_write_then_resolve_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model-config.json");

    let written = {
        let mut store = ConfigStore::open(path.clone()).unwrap();
        let config = store.add(create_request("default")).unwrap();
        store.set_active(&config.id).unwrap()
    };

    // a fresh store over the same file resolves a deep-equal config
    let store = ConfigStore::open(path).unwrap();
    assert_eq!(store.active_config().unwrap(), written);
}

#[test]
fn test_resolver_requires_credentials() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = ConfigStore::open(dir.path().join("model-config.json")).unwrap();

    let mut request = create_request("no-key");
    request.api_key = String::new();
    let config = store.add(request).unwrap();
    store.set_active(&config.id).unwrap();
    assert!(matches!(
        store.active_config(),
        Err(AppError::NotConfigured(_))
    ));

    let mut request = create_request("no-url");
    request.base_url = "  ".to_string();
    let config = store.add(request).unwrap();
    store.set_active(&config.id).unwrap();
    assert!(matches!(
        store.active_config(),
        Err(AppError::NotConfigured(_))
    ));
}

#[test]
fn test_resolver_without_blob() {
    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::open(dir.path().join("missing.json")).unwrap();
    assert!(matches!(
        store.active_config(),
        Err(AppError::NotConfigured(_))
    ));
}

#[test]
fn test_switching_active_keeps_single_flag() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = ConfigStore::open(dir.path().join("model-config.json")).unwrap();

    let a = store.add(create_request("a")).unwrap();
    let b = store.add(create_request("b")).unwrap();
    let c = store.add(create_request("c")).unwrap();

    store.set_active(&a.id).unwrap();
    store.set_active(&c.id).unwrap();
    store.set_active(&b.id).unwrap();

    let flags: Vec<bool> = store.list().iter().map(|cfg| cfg.is_active).collect();
    assert_eq!(flags.iter().filter(|f| **f).count(), 1);
    assert_eq!(store.active_config().unwrap().id, b.id);
}

#[test]
fn test_update_persists_across_reload() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = ConfigStore::open(dir.path().join("model-config.json")).unwrap();
    let config = store.add(create_request("default")).unwrap();
    store.set_active(&config.id).unwrap();

    store
        .update(
            &config.id,
            ModelConfigUpdateRequest {
                base_url: Some("https://gateway.local/v1".to_string()),
                max_tokens: Some(8192),
                ..Default::default()
            },
        )
        .unwrap();

    store.reload().unwrap();
    let active = store.active_config().unwrap();
    assert_eq!(active.base_url, "https://gateway.local/v1");
    assert_eq!(active.max_tokens, 8192);
}

#[test]
fn test_rejected_update_never_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model-config.json");
    let mut store = ConfigStore::open(path.clone()).unwrap();
    let config = store.add(create_request("default")).unwrap();
    store.set_active(&config.id).unwrap();

    let err = store
        .update(
            &config.id,
            ModelConfigUpdateRequest {
                temperature: Some(9.0),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    // the in-memory entry keeps its old values
    assert_eq!(store.list()[0].temperature, 0.7);

    // and a later save writes nothing from the rejected update
    store.set_active(&config.id).unwrap();
    let reopened = ConfigStore::open(path).unwrap();
    assert_eq!(reopened.active_config().unwrap().temperature, 0.7);
}

#[test]
fn test_remove_active_clears_resolver() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = ConfigStore::open(dir.path().join("model-config.json")).unwrap();

    let keep = store.add(create_request("keep")).unwrap();
    let doomed = store.add(create_request("doomed")).unwrap();
    store.set_active(&doomed.id).unwrap();

    store.remove(&doomed.id).unwrap();
    assert!(matches!(
        store.active_config(),
        Err(AppError::NotConfigured(_))
    ));
    assert_eq!(store.list().len(), 1);
    assert_eq!(store.list()[0].id, keep.id);
}
