//! Bot abstraction for delivering replies.
//!
//! [`Bot`] is transport-agnostic; [`crate::telegram::TelegramBotAdapter`] implements it via teloxide
//! and tests substitute a recording mock.

use async_trait::async_trait;

use super::error::Result;
use super::types::{Chat, MarkupMode};

/// Sends replies to a chat. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends `text` shown literally (no markup interpretation).
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends `text` rendered with `mode`. The transport may reject malformed markup;
    /// that surfaces as [`super::DbotError::Bot`].
    async fn send_formatted(&self, chat: &Chat, text: &str, mode: MarkupMode) -> Result<()>;
}
