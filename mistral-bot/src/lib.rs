//! # mistral_bot
//!
//! Telegram relay to Mistral AI. **Public API:** see [facade]: `load_config`,
//! `build_handler_chain`, `run_relay_bot`.

mod assembly;
pub mod cli;
pub mod completion;
pub mod config;
mod facade;
pub mod handlers;

pub use cli::{Cli, Commands};
pub use completion::{
    CompletionClient, CompletionResult, FALLBACK_MALFORMED, FALLBACK_UNAVAILABLE,
    SYSTEM_INSTRUCTION,
};
pub use config::{AppConfig, RelayConfig};
pub use facade::*;
pub use handlers::{RelayHandler, StartHandler, START_GREETING};
