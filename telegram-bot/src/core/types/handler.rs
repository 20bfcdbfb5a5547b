//! Handler trait and transport conversion traits.

use async_trait::async_trait;

use super::{message::Message, response::HandlerResponse, user::User};
use crate::core::error::Result;

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// One step of the [`crate::HandlerChain`]. All `before` run in order, then `handle` until one
/// returns Stop or Reply, then all `after` in reverse with the final response.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Name used in chain logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Return false to stop the chain before any `handle` runs.
    async fn before(&self, _message: &Message) -> Result<bool> {
        Ok(true)
    }

    /// Default: Continue.
    async fn handle(&self, _message: &Message) -> Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }

    async fn after(&self, _message: &Message, _response: &HandlerResponse) -> Result<()> {
        Ok(())
    }
}
