//! Integration Tests Module
//!
//! End-to-end tests for the generation core: the config store lifecycle
//! and full generation cycles against an in-memory provider.

// Shared test fixtures (scripted provider, store builders)
mod support;

// Config store lifecycle and resolver tests
mod config_store_test;

// Generation pipeline end-to-end tests
mod generation_test;
