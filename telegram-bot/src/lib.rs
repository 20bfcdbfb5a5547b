//! # Telegram bot framework
//!
//! Transport-agnostic core (Handler, Bot, Message, MarkupMode), the handler chain, reply
//! formatting (Markdown → HTML, MarkdownV2 escaping), and the teloxide webhook runner.
//! Applications plug their handlers into a [`HandlerChain`] and hand it to [`run_webhook`].

pub mod chain;
pub mod config;
pub mod core;
pub mod format;
pub mod telegram;

pub use crate::core::{
    init_tracing, Bot, Chat, DbotError, Handler, HandlerError, HandlerResponse, MarkupMode,
    Message, Result, ToCoreMessage, ToCoreUser, User,
};

pub use chain::HandlerChain;

pub use config::BaseConfig;

pub use format::{escape_markdown_v2, markdown_to_html, FormatStrategy, FormattedReply};

pub use telegram::{
    build_teloxide_bot, process_message, process_update_without_message, report_update_error,
    run_webhook, TelegramBotAdapter, TelegramMessageWrapper, TelegramUserWrapper, WebhookOptions,
    GENERIC_ERROR_REPLY,
};
