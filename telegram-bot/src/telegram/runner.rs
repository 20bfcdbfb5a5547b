//! Webhook runner: receives updates over HTTPS, converts messages to core::Message and passes them
//! to the HandlerChain. Failures are routed to [`report_update_error`].

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use teloxide::{prelude::*, update_listeners::webhooks};
use tracing::{info, instrument};

use super::adapters::TelegramMessageWrapper;
use super::error_report::report_update_error;
use crate::chain::HandlerChain;
use crate::core::{Bot as CoreBot, HandlerError, HandlerResponse, Message as CoreMessage, ToCoreMessage};

/// Where to listen and which public URL Telegram should post updates to.
#[derive(Debug, Clone)]
pub struct WebhookOptions {
    pub listen_addr: SocketAddr,
    /// Full public URL including the secret path segment.
    pub url: reqwest::Url,
}

/// Runs one core message through the chain. A chain error is reported to the user; the
/// returned response is `Stop` in that case.
#[instrument(skip(chain, bot, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
pub async fn process_message(
    chain: &HandlerChain,
    bot: &dyn CoreBot,
    message: &CoreMessage,
) -> HandlerResponse {
    info!(
        message_id = %message.id,
        message_type = %message.message_type,
        message_content = %message.content,
        "Received message"
    );
    match chain.handle(message).await {
        Ok(response) => response,
        Err(e) => {
            report_update_error(bot, Some(message), &e).await;
            HandlerResponse::Stop
        }
    }
}

/// Handles an update that carries no message: logged, nothing is sent.
pub async fn process_update_without_message(bot: &dyn CoreBot) {
    report_update_error(bot, None, &HandlerError::NoMessage.into()).await;
}

async fn on_message(
    msg: Message,
    chain: HandlerChain,
    reply_bot: Arc<dyn CoreBot>,
) -> ResponseResult<()> {
    let core_msg = TelegramMessageWrapper(&msg).to_core();
    process_message(&chain, reply_bot.as_ref(), &core_msg).await;
    Ok(())
}

/// Registers the webhook with Telegram, binds `options.listen_addr` and dispatches updates
/// until shutdown (Ctrl-C).
#[instrument(skip_all, fields(listen_addr = %options.listen_addr))]
pub async fn run_webhook(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    reply_bot: Arc<dyn CoreBot>,
    options: WebhookOptions,
) -> Result<()> {
    let origin = options.url.origin().ascii_serialization();
    let listener = webhooks::axum(
        bot.clone(),
        webhooks::Options::new(options.listen_addr, options.url),
    )
    .await
    .with_context(|| format!("Failed to set up webhook at {}", origin))?;

    info!(webhook_origin = %origin, "Webhook registered; dispatching updates");

    let default_bot = reply_bot.clone();
    let handler = Update::filter_message().endpoint(on_message);
    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![handler_chain, reply_bot])
        .default_handler(move |update: Arc<Update>| {
            let bot = default_bot.clone();
            async move {
                info!(update_id = ?update.id, "Update without message");
                process_update_without_message(bot.as_ref()).await;
            }
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "An error has occurred in the dispatcher",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;

    Ok(())
}
