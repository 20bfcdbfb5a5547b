//! Handler chain result type.

/// Handler result for the chain. `Reply(text)` carries the delivered body so `after()` hooks can see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no response body.
    Stop,
    /// Skip this handler, try next.
    Ignore,
    /// Stop the chain; the reply text that was sent.
    Reply(String),
}

impl HandlerResponse {
    /// True for Stop and Reply, which end the handle phase.
    pub fn ends_chain(&self) -> bool {
        matches!(self, HandlerResponse::Stop | HandlerResponse::Reply(_))
    }

    /// The reply body, if any.
    pub fn reply_text(&self) -> Option<&str> {
        match self {
            HandlerResponse::Reply(text) => Some(text),
            _ => None,
        }
    }
}
