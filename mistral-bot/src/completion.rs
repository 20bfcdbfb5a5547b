//! Completion client: one system instruction plus the user's text in, always a string out.

use std::sync::Arc;

use llm_client::{ChatMessage, LlmClient, LlmError};
use tracing::{error, info, instrument};

/// Fixed system instruction sent with every request.
pub const SYSTEM_INSTRUCTION: &str = "You are an assistant that only answers questions about \
Mistral AI: its company, its models, its API and how to use them. If a question is about \
anything else, politely refuse and suggest the user ask something about Mistral AI instead.";

/// Reply when the API answered but the body had no completion text.
pub const FALLBACK_MALFORMED: &str = "Sorry, I couldn't process the response.";
/// Reply when the API could not be reached or returned an error status.
pub const FALLBACK_UNAVAILABLE: &str = "Error: Unable to get a response from the Mistral API.";

/// Outcome of one completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionResult {
    Success(String),
    /// `reason` is for logs; `fallback` is what the user sees.
    Failure { reason: String, fallback: &'static str },
}

impl CompletionResult {
    pub fn from_llm(result: Result<String, LlmError>) -> Self {
        match result {
            Ok(text) => CompletionResult::Success(text),
            Err(e) => {
                let fallback = match e {
                    LlmError::MalformedResponse(_) => FALLBACK_MALFORMED,
                    LlmError::Request(_) | LlmError::Status { .. } => FALLBACK_UNAVAILABLE,
                };
                CompletionResult::Failure {
                    reason: e.to_string(),
                    fallback,
                }
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CompletionResult::Success(_))
    }

    /// Text to show the user: the completion, or the fallback on failure.
    pub fn into_text(self) -> String {
        match self {
            CompletionResult::Success(text) => text,
            CompletionResult::Failure { fallback, .. } => fallback.to_string(),
        }
    }
}

/// Wraps an [`LlmClient`] with the process-wide system instruction.
#[derive(Clone)]
pub struct CompletionClient {
    llm: Arc<dyn LlmClient>,
    system_prompt: String,
}

impl CompletionClient {
    /// Uses [`SYSTEM_INSTRUCTION`].
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self::with_system_prompt(llm, SYSTEM_INSTRUCTION)
    }

    pub fn with_system_prompt(llm: Arc<dyn LlmClient>, system_prompt: impl Into<String>) -> Self {
        Self {
            llm,
            system_prompt: system_prompt.into(),
        }
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Messages for one request: the system instruction, then the user prompt.
    pub fn messages_for(&self, prompt: &str) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(self.system_prompt.as_str()),
            ChatMessage::user(prompt),
        ]
    }

    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    pub async fn request(&self, prompt: &str) -> CompletionResult {
        let result = self
            .llm
            .get_llm_response_with_messages(self.messages_for(prompt))
            .await;
        let result = CompletionResult::from_llm(result);
        match &result {
            CompletionResult::Success(text) => {
                info!(response_len = text.len(), "Mistral completion received")
            }
            CompletionResult::Failure { reason, .. } => {
                error!(error = %reason, "Mistral API error")
            }
        }
        result
    }

    /// Never fails: errors degrade to a fallback string.
    pub async fn complete(&self, prompt: &str) -> String {
        self.request(prompt).await.into_text()
    }
}
