//! Inbound message type for the core model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// A single inbound message with user, chat, and content. Immutable once converted from the transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    /// Message text; empty for non-text messages.
    pub content: String,
    pub message_type: String,
    pub created_at: DateTime<Utc>,
    pub reply_to_message_id: Option<String>,
}

impl Message {
    /// Returns true when the content is a bot command (`/start`, `/help@bot`, ...).
    pub fn is_command(&self) -> bool {
        self.content.trim_start().starts_with('/')
    }

    /// Returns the command name without the leading `/` and any `@botname` suffix.
    pub fn command(&self) -> Option<&str> {
        let text = self.content.trim_start().strip_prefix('/')?;
        let word = text.split_whitespace().next()?;
        let name = word.split('@').next().unwrap_or(word);
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }
}
