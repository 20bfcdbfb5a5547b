//! Relays user text to the completion client and delivers the formatted reply.

use std::sync::Arc;

use async_trait::async_trait;
use telegram_bot::{
    Bot as CoreBot, Chat, FormatStrategy, FormattedReply, Handler, HandlerResponse, MarkupMode,
    Message, Result,
};
use tracing::{error, info, instrument, warn};

use crate::completion::CompletionClient;

/// Handles plain text (not commands): complete, format, deliver. Returns `Reply(body)`.
///
/// Delivery tries the strategy's markup mode first. If that send fails the same body goes out
/// once more as plain text; a second failure is only logged.
#[derive(Clone)]
pub struct RelayHandler {
    completion: CompletionClient,
    bot: Arc<dyn CoreBot>,
    strategy: FormatStrategy,
}

impl RelayHandler {
    pub fn new(completion: CompletionClient, bot: Arc<dyn CoreBot>, strategy: FormatStrategy) -> Self {
        Self {
            completion,
            bot,
            strategy,
        }
    }

    pub fn strategy(&self) -> FormatStrategy {
        self.strategy
    }

    /// Returns true when some attempt was accepted by the bot.
    async fn deliver(&self, chat: &Chat, reply: &FormattedReply) -> bool {
        if reply.mode == MarkupMode::Plain {
            return match self.bot.send_message(chat, &reply.body).await {
                Ok(()) => true,
                Err(e) => {
                    error!(error = %e, "Failed to send reply");
                    false
                }
            };
        }

        match self.bot.send_formatted(chat, &reply.body, reply.mode).await {
            Ok(()) => return true,
            Err(e) => {
                warn!(error = %e, mode = ?reply.mode, "Formatted send failed, retrying as plain text")
            }
        }

        match self.bot.send_message(chat, &reply.body).await {
            Ok(()) => true,
            Err(e) => {
                error!(error = %e, "Plain-text fallback send failed");
                false
            }
        }
    }
}

#[async_trait]
impl Handler for RelayHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.is_command() || message.content.trim().is_empty() {
            return Ok(HandlerResponse::Continue);
        }

        info!(content = %message.content, "Relaying message to Mistral");
        let text = self.completion.complete(&message.content).await;
        let reply = self.strategy.apply(&text);

        let delivered = self.deliver(&message.chat, &reply).await;
        info!(delivered, mode = ?reply.mode, reply_len = reply.body.len(), "Reply handled");

        Ok(HandlerResponse::Reply(reply.body))
    }
}
