//! HTTP Client Factory
//!
//! Provides a factory function for building reqwest clients.
//!
//! No request deadline is set here: timeouts are delegated to the client
//! and provider defaults, and the pipeline never retries.

/// User-Agent sent with every outbound request.
const USER_AGENT: &str = concat!("prompt-studio/", env!("CARGO_PKG_VERSION"));

/// Build a `reqwest::Client` with the shared defaults.
pub fn build_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .expect("failed to build reqwest client")
}
