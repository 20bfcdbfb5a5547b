//! **Public API of this crate:** [`load_config`], [`build_handler_chain`], [`run_relay_bot`].

use std::sync::Arc;

use anyhow::Result;
use llm_client::LlmClient;
use telegram_bot::{build_teloxide_bot, run_webhook, Bot as CoreBot, HandlerChain, TelegramBotAdapter};
use tracing::info;

use crate::assembly;
use crate::config::{AppConfig, RelayConfig};

/// Loads and validates config from the environment. `token` overrides BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<AppConfig> {
    AppConfig::load(token)
}

/// Builds the relay chain around any bot and LLM client. Tests pass mocks here.
pub fn build_handler_chain(
    bot: Arc<dyn CoreBot>,
    llm: Arc<dyn LlmClient>,
    relay: &RelayConfig,
) -> HandlerChain {
    assembly::build_handler_chain(bot, llm, relay)
}

/// Registers the webhook and serves updates until Ctrl-C.
pub async fn run_relay_bot(config: AppConfig) -> Result<()> {
    let teloxide_bot =
        build_teloxide_bot(&config.base.bot_token, config.base.telegram_api_url.as_deref())?;
    let reply_bot: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let llm = assembly::build_llm_client(&config.mistral)?;
    let chain = assembly::build_handler_chain(reply_bot.clone(), llm, &config.relay);
    let options = config.base.webhook_options()?;

    info!(
        listen_addr = %options.listen_addr,
        handlers = chain.len(),
        "Starting Mistral relay bot"
    );
    run_webhook(teloxide_bot, chain, reply_bot, options).await
}
