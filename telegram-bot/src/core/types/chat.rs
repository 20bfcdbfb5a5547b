//! Chat identity: the reply target of a message.

use serde::{Deserialize, Serialize};

/// Chat (private, group or channel). Opaque to handlers apart from being the reply target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}
