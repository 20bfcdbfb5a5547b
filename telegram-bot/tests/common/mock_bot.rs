//! Recording implementation of [`telegram_bot::Bot`] for integration tests.

use async_trait::async_trait;
use std::sync::Mutex;
use telegram_bot::{Bot, Chat, DbotError, MarkupMode, Result};

/// One recorded send. `mode` is None for plain `send_message`.
#[derive(Debug, Clone, PartialEq)]
pub struct SentRecord {
    pub chat_id: i64,
    pub text: String,
    pub mode: Option<MarkupMode>,
}

/// Records every send; optionally fails all sends.
#[derive(Default)]
pub struct MockBot {
    pub sent: Mutex<Vec<SentRecord>>,
    pub fail_all: bool,
}

impl MockBot {
    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<SentRecord> {
        self.sent.lock().unwrap().clone()
    }

    fn record(&self, chat: &Chat, text: &str, mode: Option<MarkupMode>) -> Result<()> {
        self.sent.lock().unwrap().push(SentRecord {
            chat_id: chat.id,
            text: text.to_string(),
            mode,
        });
        if self.fail_all {
            return Err(DbotError::Bot("mock send failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(chat, text, None)
    }

    async fn send_formatted(&self, chat: &Chat, text: &str, mode: MarkupMode) -> Result<()> {
        self.record(chat, text, Some(mode))
    }
}
