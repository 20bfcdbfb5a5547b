//! Relay handlers.
//!
//! [`StartHandler`] greets on `/start`. [`RelayHandler`] forwards any other text to Mistral and
//! delivers the formatted reply, falling back to plain text when rich delivery fails.

mod relay;
mod start;

pub use relay::RelayHandler;
pub use start::{StartHandler, START_GREETING};
