//! # LLM client abstraction
//!
//! Defines the [`LlmClient`] trait and a Mistral implementation speaking the chat completions
//! protocol over reqwest. Failures are typed ([`LlmError`]) so callers can tell a transport or
//! status failure from a response they could not read.

use async_trait::async_trait;
use thiserror::Error;

mod config;
mod mask;
mod message;
mod mistral;

pub use config::{LlmConfig, MistralConfig, DEFAULT_MISTRAL_API_URL, DEFAULT_MISTRAL_MODEL};
pub use mask::mask_token;
pub use message::{ChatMessage, MessageRole};
pub use mistral::{MistralLlmClient, MAX_TOKENS, TEMPERATURE};

/// Why a completion request produced no text.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Connection, TLS, timeout or other transport failure.
    #[error("request to completion API failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("completion API returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// 2xx response whose body lacks `choices[0].message.content`.
    #[error("malformed completion response: {0}")]
    MalformedResponse(String),
}

/// LLM client interface: request a completion for a list of messages.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Returns the first choice's text for `messages` (system then user).
    async fn get_llm_response_with_messages(
        &self,
        messages: Vec<ChatMessage>,
    ) -> Result<String, LlmError>;
}
