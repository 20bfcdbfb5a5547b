//! Assembly: builds the LLM client and the handler chain. Used by the [facade](crate::facade).

use std::sync::Arc;

use anyhow::Result;
use llm_client::{mask_token, LlmClient, LlmConfig, MistralConfig, MistralLlmClient};
use telegram_bot::{Bot as CoreBot, HandlerChain};
use tracing::info;

use crate::completion::CompletionClient;
use crate::config::RelayConfig;
use crate::handlers::{RelayHandler, StartHandler};

pub(crate) fn build_llm_client(config: &MistralConfig) -> Result<Arc<dyn LlmClient>> {
    let client = MistralLlmClient::from_config(config)?;
    info!(
        api_url = %config.api_url(),
        model = %config.model(),
        api_key = %mask_token(config.api_key()),
        timeout_secs = config.timeout().as_secs(),
        "Mistral client ready"
    );
    Ok(Arc::new(client))
}

pub(crate) fn build_completion_client(
    llm: Arc<dyn LlmClient>,
    relay: &RelayConfig,
) -> CompletionClient {
    match relay.system_prompt {
        Some(ref prompt) => {
            let prefix: String = prompt.chars().take(50).collect();
            info!(len = prompt.len(), prefix = %prefix, "Using SYSTEM_PROMPT from env");
            CompletionClient::with_system_prompt(llm, prompt.as_str())
        }
        None => CompletionClient::new(llm),
    }
}

/// `[StartHandler, RelayHandler]`, both replying through `bot`.
pub(crate) fn build_handler_chain(
    bot: Arc<dyn CoreBot>,
    llm: Arc<dyn LlmClient>,
    relay: &RelayConfig,
) -> HandlerChain {
    let completion = build_completion_client(llm, relay);
    HandlerChain::new()
        .add_handler(Arc::new(StartHandler::new(bot.clone())))
        .add_handler(Arc::new(RelayHandler::new(
            completion,
            bot,
            relay.format_strategy,
        )))
}
