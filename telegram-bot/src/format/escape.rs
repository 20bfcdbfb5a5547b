//! Character escaping for the two rich rendering modes.

/// Characters MarkdownV2 treats as markup. The escape character itself is included, so a
/// literal `\` in the input becomes `\\`.
pub const MARKDOWN_V2_RESERVED: &[char] = &[
    '\\', '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

/// Escapes every reserved MarkdownV2 character in one pass.
///
/// Each reserved character gets exactly one `\` in front of it, including `\` itself, so
/// escapes inserted here are never escaped again.
pub fn escape_markdown_v2(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    for c in text.chars() {
        if MARKDOWN_V2_RESERVED.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Replaces `&`, `<` and `>` with HTML entities.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
