//! Server configuration from the process environment

use std::net::SocketAddr;

use anyhow::Context;

/// Environment-derived server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Gemini credential; its absence is the documented primary failure
    /// mode for quest generation
    pub gemini_api_key: Option<String>,
    /// Optional model override for the mentor
    pub gemini_model: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr = std::env::var("LIFEQUEST_BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8000".to_string())
            .parse()
            .context("Invalid LIFEQUEST_BIND_ADDR")?;

        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());
        let gemini_model = std::env::var("LIFEQUEST_GEMINI_MODEL").ok();

        Ok(Self {
            bind_addr,
            gemini_api_key,
            gemini_model,
        })
    }
}
