//! End-to-end relay tests: real [`MistralLlmClient`] against a mockito Mistral endpoint,
//! recording bot on the Telegram side.

mod common;

use std::sync::Arc;

use common::create_test_message;
use common::mock_bot::MockBot;
use llm_client::{MistralConfig, MistralLlmClient};
use mistral_bot::{
    build_handler_chain, CompletionClient, RelayConfig, FALLBACK_MALFORMED, FALLBACK_UNAVAILABLE,
    SYSTEM_INSTRUCTION,
};
use mockito::Matcher;
use serde_json::json;
use telegram_bot::{HandlerResponse, MarkupMode};

const API_KEY: &str = "relay-test-key-0000";

fn llm_for(server: &mockito::ServerGuard) -> Arc<MistralLlmClient> {
    let config = MistralConfig::new(API_KEY, format!("{}/v1/chat/completions", server.url()));
    Arc::new(MistralLlmClient::from_config(&config).expect("client builds"))
}

/// **Test:** A user question reaches Mistral with the system instruction and the reply is
/// delivered as HTML.
///
/// **Setup:** Mock endpoint matching bearer auth and the two-message body.
///
/// **Expected:** One HTML send with converted markup.
#[tokio::test]
async fn question_is_relayed_and_reply_formatted() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", format!("Bearer {}", API_KEY).as_str())
        .match_body(Matcher::PartialJson(json!({
            "messages": [
                {"role": "system", "content": SYSTEM_INSTRUCTION},
                {"role": "user", "content": "What is Mistral?"}
            ],
            "max_tokens": 150,
            "temperature": 0.7
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices":[{"message":{"role":"assistant","content":"*Mistral AI* builds models."}}]}"#)
        .expect(1)
        .create_async()
        .await;

    let bot = Arc::new(MockBot::new());
    let chain = build_handler_chain(bot.clone(), llm_for(&server), &RelayConfig::default());

    let response = chain
        .handle(&create_test_message("What is Mistral?"))
        .await
        .unwrap();

    let body = "<i>Mistral AI</i> builds models.";
    assert_eq!(response, HandlerResponse::Reply(body.to_string()));
    let sent = bot.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].text, body);
    assert_eq!(sent[0].mode, Some(MarkupMode::Html));
    mock.assert_async().await;
}

/// **Test:** HTTP 500 from Mistral becomes the unavailable fallback for the user.
///
/// **Expected:** One request (no retry); the fallback is sent.
#[tokio::test]
async fn server_error_delivers_unavailable_fallback() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(500)
        .with_body("upstream exploded")
        .expect(1)
        .create_async()
        .await;

    let bot = Arc::new(MockBot::new());
    let chain = build_handler_chain(bot.clone(), llm_for(&server), &RelayConfig::default());

    chain.handle(&create_test_message("hi")).await.unwrap();

    let sent = bot.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].text, FALLBACK_UNAVAILABLE);
    mock.assert_async().await;
}

/// **Test:** `complete` maps a 2xx body without choices to the malformed fallback.
#[tokio::test]
async fn complete_maps_missing_choices_to_malformed_fallback() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices":[]}"#)
        .create_async()
        .await;

    let completion = CompletionClient::new(llm_for(&server));
    assert_eq!(completion.complete("hi").await, FALLBACK_MALFORMED);
}

/// **Test:** `complete` never fails even when nothing listens at the API URL.
#[tokio::test]
async fn complete_with_unreachable_api_returns_fallback() {
    let config = MistralConfig::new(API_KEY, "http://127.0.0.1:1/v1/chat/completions");
    let llm = Arc::new(MistralLlmClient::from_config(&config).expect("client builds"));

    let result = CompletionClient::new(llm).request("hi").await;

    assert!(!result.is_success());
    assert_eq!(result.into_text(), FALLBACK_UNAVAILABLE);
}
