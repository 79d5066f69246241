//! Storage Layer
//!
//! Local persistence for user-managed model configurations.

pub mod config;

pub use config::ConfigStore;
