//! Wraps teloxide::Bot and implements [`crate::core::Bot`]. Production code sends via Telegram;
//! tests substitute another Bot impl.

use crate::core::{Bot as CoreBot, Chat, DbotError, MarkupMode, Result};
use anyhow::Context;
use async_trait::async_trait;
use teloxide::{prelude::*, types::ChatId, types::ParseMode};

/// Teloxide parse mode for a core markup mode; `None` sends without a parse mode.
pub fn parse_mode_for(mode: MarkupMode) -> Option<ParseMode> {
    match mode {
        MarkupMode::Plain => None,
        MarkupMode::MarkdownV2 => Some(ParseMode::MarkdownV2),
        MarkupMode::Html => Some(ParseMode::Html),
    }
}

/// Builds the teloxide Bot, pointing it at `api_url` when set (e.g. a mock server in tests).
pub fn build_teloxide_bot(token: &str, api_url: Option<&str>) -> anyhow::Result<teloxide::Bot> {
    let bot = teloxide::Bot::new(token);
    match api_url {
        Some(url) => {
            let url = reqwest::Url::parse(url)
                .with_context(|| format!("Invalid Telegram API URL: {}", url))?;
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_formatted(&self, chat: &Chat, text: &str, mode: MarkupMode) -> Result<()> {
        let request = self.bot.send_message(ChatId(chat.id), text.to_string());
        let request = match parse_mode_for(mode) {
            Some(parse_mode) => request.parse_mode(parse_mode),
            None => request,
        };
        request.await.map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }
}
