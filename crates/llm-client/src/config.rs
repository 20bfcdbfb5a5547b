//! LLM configuration: trait and env-based Mistral implementation.

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

pub const DEFAULT_MISTRAL_API_URL: &str = "https://api.mistral.ai/v1/chat/completions";
pub const DEFAULT_MISTRAL_MODEL: &str = "open-mistral-7b";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Connection settings for a chat completions endpoint.
pub trait LlmConfig: Send + Sync {
    fn api_key(&self) -> &str;
    /// Full URL of the chat completions endpoint.
    fn api_url(&self) -> &str;
    fn model(&self) -> &str;
    fn timeout(&self) -> Duration;
}

/// Mistral config loaded from environment variables.
#[derive(Debug, Clone)]
pub struct MistralConfig {
    pub mistral_api_key: String,
    pub mistral_api_url: String,
    pub mistral_model: String,
    pub timeout_secs: u64,
}

impl LlmConfig for MistralConfig {
    fn api_key(&self) -> &str {
        &self.mistral_api_key
    }
    fn api_url(&self) -> &str {
        &self.mistral_api_url
    }
    fn model(&self) -> &str {
        &self.mistral_model
    }
    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl MistralConfig {
    /// Load from environment variables. MISTRAL_API_KEY is required.
    pub fn from_env() -> Result<Self> {
        let mistral_api_key = env::var("MISTRAL_API_KEY")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .context("MISTRAL_API_KEY not set")?;
        let mistral_api_url = env::var("MISTRAL_API_URL")
            .unwrap_or_else(|_| DEFAULT_MISTRAL_API_URL.to_string());
        let mistral_model =
            env::var("MISTRAL_MODEL").unwrap_or_else(|_| DEFAULT_MISTRAL_MODEL.to_string());
        let timeout_secs = match env::var("MISTRAL_TIMEOUT_SECS") {
            Ok(s) => s
                .trim()
                .parse()
                .with_context(|| format!("MISTRAL_TIMEOUT_SECS is not a number: {}", s))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };
        Ok(Self {
            mistral_api_key,
            mistral_api_url,
            mistral_model,
            timeout_secs,
        })
    }

    /// Config with the given key and URL; model and timeout take their defaults.
    pub fn new(api_key: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            mistral_api_key: api_key.into(),
            mistral_api_url: api_url.into(),
            mistral_model: DEFAULT_MISTRAL_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Checks the endpoint URL parses.
    pub fn validate(&self) -> Result<()> {
        reqwest::Url::parse(&self.mistral_api_url).with_context(|| {
            format!("MISTRAL_API_URL is not a valid URL: {}", self.mistral_api_url)
        })?;
        Ok(())
    }
}
