//! Scripted [`llm_client::LlmClient`] that records the messages it was given.

use async_trait::async_trait;
use llm_client::{ChatMessage, LlmClient, LlmError};
use std::sync::Mutex;

pub enum Script {
    Reply(String),
    Status(u16),
    Malformed,
}

pub struct MockLlm {
    script: Script,
    pub requests: Mutex<Vec<Vec<ChatMessage>>>,
}

impl MockLlm {
    pub fn replying(text: &str) -> Self {
        Self::with_script(Script::Reply(text.to_string()))
    }

    pub fn with_script(script: Script) -> Self {
        Self {
            script,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<Vec<ChatMessage>> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn get_llm_response_with_messages(
        &self,
        messages: Vec<ChatMessage>,
    ) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(messages);
        match &self.script {
            Script::Reply(text) => Ok(text.clone()),
            Script::Status(status) => Err(LlmError::Status {
                status: *status,
                body: "error".to_string(),
            }),
            Script::Malformed => Err(LlmError::MalformedResponse("no choices".to_string())),
        }
    }
}
