//! Reply formatting: turns model output into a body plus the [`MarkupMode`] to deliver it with.
//!
//! Two rich strategies are available. [`FormatStrategy::EscapeAll`] escapes every MarkdownV2
//! special character so the text renders literally; [`FormatStrategy::Structural`] converts
//! Markdown (bold, italic, headings, numbered items, code blocks) to Telegram HTML.

mod escape;
mod markdown;

use std::fmt;
use std::str::FromStr;

use crate::core::{DbotError, MarkupMode};

pub use escape::{escape_html, escape_markdown_v2, MARKDOWN_V2_RESERVED};
pub use markdown::{
    blank_lines, bold, bold_italic, code_blocks, headings, italic, markdown_to_html,
    normalize_newlines, numbered_items, trim, ConversionStep, STRUCTURAL_PIPELINE,
};

/// A reply ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedReply {
    pub body: String,
    pub mode: MarkupMode,
}

/// Which formatting to apply before delivery. Chosen once from config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatStrategy {
    /// Send the text unchanged without markup.
    Plain,
    /// Escape all MarkdownV2 specials; send as MarkdownV2.
    EscapeAll,
    /// Convert Markdown to HTML; send as HTML.
    #[default]
    Structural,
}

impl FormatStrategy {
    /// Markup mode the formatted body must be sent with.
    pub fn mode(&self) -> MarkupMode {
        match self {
            FormatStrategy::Plain => MarkupMode::Plain,
            FormatStrategy::EscapeAll => MarkupMode::MarkdownV2,
            FormatStrategy::Structural => MarkupMode::Html,
        }
    }

    pub fn apply(&self, text: &str) -> FormattedReply {
        let body = match self {
            FormatStrategy::Plain => text.to_string(),
            FormatStrategy::EscapeAll => escape_markdown_v2(text),
            FormatStrategy::Structural => markdown_to_html(text),
        };
        FormattedReply {
            body,
            mode: self.mode(),
        }
    }
}

impl FromStr for FormatStrategy {
    type Err = DbotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "none" => Ok(FormatStrategy::Plain),
            "markdown_v2" | "markdownv2" | "escape" => Ok(FormatStrategy::EscapeAll),
            "html" | "structural" => Ok(FormatStrategy::Structural),
            other => Err(DbotError::Config(format!(
                "Unknown FORMAT_STRATEGY '{}': expected plain, markdown_v2 or html",
                other
            ))),
        }
    }
}

impl fmt::Display for FormatStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormatStrategy::Plain => "plain",
            FormatStrategy::EscapeAll => "markdown_v2",
            FormatStrategy::Structural => "html",
        };
        f.write_str(name)
    }
}
