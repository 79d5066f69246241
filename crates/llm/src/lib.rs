//! Prompt Studio LLM
//!
//! Provides a unified interface for talking to OpenAI-chat-completions
//! compatible endpoints. The concrete host, model, and credentials come
//! from a user-managed [`ModelConfig`]; everything that speaks the OpenAI
//! dialect (official API, proxies, self-hosted gateways) goes through the
//! same provider.
//!
//! Also includes the HTTP client factory and the provider error taxonomy.

pub mod http_client;
pub mod openai;
pub mod provider;
pub mod types;

// Re-export main types
pub use http_client::build_http_client;
pub use openai::OpenAiCompatProvider;
pub use provider::ChatProvider;
pub use types::*;
