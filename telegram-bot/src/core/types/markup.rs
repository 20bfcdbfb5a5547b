//! Rendering mode for outbound text.

use serde::{Deserialize, Serialize};

/// How the platform should interpret markup embedded in a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkupMode {
    /// Text is shown literally.
    Plain,
    /// Inline MarkdownV2; every reserved character in literal text must be escaped.
    MarkdownV2,
    /// Structural HTML subset (`<b>`, `<i>`, `<pre>`).
    Html,
}

impl MarkupMode {
    /// True when the platform interprets markup (and may reject it).
    pub fn is_rich(&self) -> bool {
        !matches!(self, MarkupMode::Plain)
    }
}
