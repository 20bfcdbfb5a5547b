//! Core types and traits: Handler, Bot, Message, HandlerResponse, MarkupMode, error, logger.
//! Transport-agnostic; the Telegram glue lives in [`crate::telegram`].

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{DbotError, HandlerError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, MarkupMode, Message, ToCoreMessage,
    ToCoreUser, User,
};
