use std::sync::Arc;

use async_trait::async_trait;
use telegram_bot::{Bot as CoreBot, Handler, HandlerResponse, Message, Result};
use tracing::{info, instrument};

pub const START_GREETING: &str = "Hi! I'm a bot powered by Mistral AI. Ask me anything!";

/// Answers `/start` with [`START_GREETING`] and stops the chain.
#[derive(Clone)]
pub struct StartHandler {
    bot: Arc<dyn CoreBot>,
}

impl StartHandler {
    pub fn new(bot: Arc<dyn CoreBot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for StartHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.command() != Some("start") {
            return Ok(HandlerResponse::Continue);
        }
        info!(user_id = message.user.id, "Start command");
        self.bot.send_message(&message.chat, START_GREETING).await?;
        Ok(HandlerResponse::Stop)
    }
}
