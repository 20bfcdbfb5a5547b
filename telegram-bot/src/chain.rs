//! # Handler chain
//!
//! Runs a sequence of handlers for one inbound message: every `before` in order (any false stops
//! the chain), then `handle` until a handler returns Stop or Reply, then every `after` in reverse.

use crate::core::{Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Ordered handlers for one message. Cheap to clone; handlers are shared.
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

fn handler_name(h: &Arc<dyn Handler>) -> &'static str {
    h.name()
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handler.
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs the chain for `message` and returns the response that ended the handle phase
    /// (Continue when no handler claimed the message).
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        for h in &self.handlers {
            if !h.before(message).await? {
                info!(handler = handler_name(h), "before returned false, chain stopped");
                return Ok(HandlerResponse::Stop);
            }
        }

        let mut final_response = HandlerResponse::Continue;
        for h in &self.handlers {
            let response = h.handle(message).await?;
            debug!(handler = handler_name(h), response = ?response, "handler processed");
            if response.ends_chain() {
                info!(
                    handler = handler_name(h),
                    reply_len = ?response.reply_text().map(str::len),
                    "handle phase ended by handler"
                );
                final_response = response;
                break;
            }
        }

        for h in self.handlers.iter().rev() {
            h.after(message, &final_response).await?;
        }

        Ok(final_response)
    }
}

// Chain ordering tests live in tests/handler_chain_test.rs
