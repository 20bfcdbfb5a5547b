//! Application config: base (Telegram/webhook), Mistral, and relay settings.

use std::env;

use anyhow::{Context, Result};
use llm_client::MistralConfig;
use telegram_bot::{BaseConfig, FormatStrategy};
use tracing::info;

/// Relay settings. Fixed for the process lifetime.
#[derive(Debug, Clone, Default)]
pub struct RelayConfig {
    /// FORMAT_STRATEGY: plain | markdown_v2 | html (default html).
    pub format_strategy: FormatStrategy,
    /// SYSTEM_PROMPT override for the built-in instruction.
    pub system_prompt: Option<String>,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self> {
        let format_strategy = match env::var("FORMAT_STRATEGY") {
            Ok(s) if !s.trim().is_empty() => s.parse::<FormatStrategy>()?,
            _ => FormatStrategy::default(),
        };
        let system_prompt = env::var("SYSTEM_PROMPT")
            .ok()
            .filter(|s| !s.trim().is_empty());
        Ok(Self {
            format_strategy,
            system_prompt,
        })
    }
}

/// Everything the relay needs at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base: BaseConfig,
    pub mistral: MistralConfig,
    pub relay: RelayConfig,
}

impl AppConfig {
    /// Loads and validates all sections. `token` overrides BOT_TOKEN.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        base.validate()?;
        let mistral = MistralConfig::from_env()?;
        mistral.validate()?;
        let relay = RelayConfig::from_env().context("Invalid relay configuration")?;

        info!(
            listen_addr = %format!("{}:{}", base.listen_host, base.port),
            model = %mistral.mistral_model,
            format_strategy = %relay.format_strategy,
            custom_system_prompt = relay.system_prompt.is_some(),
            "Configuration loaded"
        );

        Ok(Self {
            base,
            mistral,
            relay,
        })
    }
}
