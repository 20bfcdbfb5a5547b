#![allow(dead_code)]

pub mod mock_bot;

use chrono::Utc;
use telegram_bot::{Chat, Message, User};

pub fn create_test_message(content: &str) -> Message {
    Message {
        id: "test_message_id".to_string(),
        content: content.to_string(),
        user: User {
            id: 123,
            username: Some("test_user".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 456,
            chat_type: "private".to_string(),
        },
        message_type: "text".to_string(),
        created_at: Utc::now(),
        reply_to_message_id: None,
    }
}
