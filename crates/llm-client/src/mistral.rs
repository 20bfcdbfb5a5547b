//! Mistral chat completions over reqwest.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use super::{mask_token, ChatMessage, LlmClient, LlmConfig, LlmError};
use crate::config::DEFAULT_MISTRAL_MODEL;

/// Upper bound on generated tokens per reply.
pub const MAX_TOKENS: u32 = 150;
/// Sampling temperature for every request.
pub const TEMPERATURE: f64 = 0.7;

/// Error bodies are logged and carried in [`LlmError::Status`]; keep them short.
const MAX_ERROR_BODY_CHARS: usize = 512;

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct Usage {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
    #[serde(default)]
    total_tokens: u32,
}

/// Pulls `choices[0].message.content` out of a 2xx body.
fn extract_content(body: &str) -> Result<String, LlmError> {
    let response: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| LlmError::MalformedResponse(format!("invalid JSON: {}", e)))?;

    if let Some(ref u) = response.usage {
        info!(
            prompt_tokens = u.prompt_tokens,
            completion_tokens = u.completion_tokens,
            total_tokens = u.total_tokens,
            "Mistral chat completion usage"
        );
    }

    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .and_then(|m| m.content)
        .ok_or_else(|| LlmError::MalformedResponse("missing choices[0].message.content".into()))
}

fn truncate_body(body: String) -> String {
    if body.chars().count() <= MAX_ERROR_BODY_CHARS {
        body
    } else {
        let mut short: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
        short.push('…');
        short
    }
}

/// [`LlmClient`] backed by the Mistral chat completions endpoint. One request per call, no retry.
#[derive(Debug, Clone)]
pub struct MistralLlmClient {
    client: Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl MistralLlmClient {
    /// Client for `api_url` with reqwest's default settings and the default model.
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            api_url,
            model: DEFAULT_MISTRAL_MODEL.to_string(),
        }
    }

    /// Client built from config, including its request timeout.
    pub fn from_config(config: &dyn LlmConfig) -> Result<Self, LlmError> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            client,
            api_key: config.api_key().to_string(),
            api_url: config.api_url().to_string(),
            model: config.model().to_string(),
        })
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl LlmClient for MistralLlmClient {
    #[instrument(skip(self, messages), fields(model = %self.model))]
    async fn get_llm_response_with_messages(
        &self,
        messages: Vec<ChatMessage>,
    ) -> Result<String, LlmError> {
        info!(
            message_count = messages.len(),
            api_key = %mask_token(&self.api_key),
            "Mistral chat completion request"
        );

        let request = ChatCompletionRequest {
            model: &self.model,
            messages: &messages,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let body = truncate_body(body);
            warn!(status = status.as_u16(), body = %body, "Mistral API returned error status");
            return Err(LlmError::Status {
                status: status.as_u16(),
                body,
            });
        }

        extract_content(&body)
    }
}
