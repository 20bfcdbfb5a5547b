//! Telegram layer: teloxide adapters, Bot implementation, error reporting, webhook runner.

mod adapters;
mod bot_adapter;
mod error_report;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{build_teloxide_bot, parse_mode_for, TelegramBotAdapter};
pub use error_report::{report_update_error, GENERIC_ERROR_REPLY};
pub use runner::{process_message, process_update_without_message, run_webhook, WebhookOptions};
