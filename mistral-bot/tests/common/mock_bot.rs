//! Recording implementation of [`telegram_bot::Bot`]; rich and plain sends can fail independently.

use async_trait::async_trait;
use std::sync::Mutex;
use telegram_bot::{Bot, Chat, DbotError, MarkupMode, Result};

/// One send attempt. `mode` is None for plain `send_message`.
#[derive(Debug, Clone, PartialEq)]
pub struct SentRecord {
    pub chat_id: i64,
    pub text: String,
    pub mode: Option<MarkupMode>,
}

#[derive(Default)]
pub struct MockBot {
    pub sent: Mutex<Vec<SentRecord>>,
    /// `send_formatted` returns an error (e.g. "can't parse entities").
    pub fail_rich: bool,
    /// `send_message` returns an error.
    pub fail_plain: bool,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_rich() -> Self {
        Self {
            fail_rich: true,
            ..Default::default()
        }
    }

    pub fn failing_all() -> Self {
        Self {
            fail_rich: true,
            fail_plain: true,
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<SentRecord> {
        self.sent.lock().unwrap().clone()
    }

    fn record(&self, chat: &Chat, text: &str, mode: Option<MarkupMode>, fail: bool) -> Result<()> {
        self.sent.lock().unwrap().push(SentRecord {
            chat_id: chat.id,
            text: text.to_string(),
            mode,
        });
        if fail {
            return Err(DbotError::Bot(
                "Bad Request: can't parse entities".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(chat, text, None, self.fail_plain)
    }

    async fn send_formatted(&self, chat: &Chat, text: &str, mode: MarkupMode) -> Result<()> {
        self.record(chat, text, Some(mode), self.fail_rich)
    }
}
