//! Last-resort error reporting for updates the handler chain failed on.

use tracing::{error, info};

use crate::core::{Bot, DbotError, Message};

/// Sent to the user when handling their message failed.
pub const GENERIC_ERROR_REPLY: &str = "An error occurred. Please try again later.";

/// Logs `err` and, when the update had a message, tells the user something went wrong.
///
/// Never fails: a failed notice is only logged. With no message there is nobody to reply to,
/// so nothing is sent.
pub async fn report_update_error(bot: &dyn Bot, message: Option<&Message>, err: &DbotError) {
    match message {
        Some(message) => {
            error!(
                error = %err,
                user_id = message.user.id,
                chat_id = message.chat.id,
                message_id = %message.id,
                "Update caused error"
            );
            match bot.send_message(&message.chat, GENERIC_ERROR_REPLY).await {
                Ok(()) => info!(chat_id = message.chat.id, "Sent generic error notice"),
                Err(e) => error!(error = %e, chat_id = message.chat.id, "Failed to send error notice"),
            }
        }
        None => {
            error!(error = %err, "Update caused error; no message to reply to");
        }
    }
}
