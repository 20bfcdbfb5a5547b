//! Markdown → Telegram HTML conversion as an ordered pipeline of whole-string steps.
//!
//! Order matters in two places: HTML escaping runs first so the only tags in the output are
//! the ones the later steps insert, and `bold_italic` then `bold` run before `italic` so
//! `***x***` and `**x**` are not read as single-asterisk spans. Inline steps leave `<pre>` blocks untouched.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::escape::escape_html;

/// One named conversion over the full string.
#[derive(Clone, Copy)]
pub struct ConversionStep {
    pub name: &'static str,
    pub apply: fn(&str) -> String,
}

impl std::fmt::Debug for ConversionStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ConversionStep").field(&self.name).finish()
    }
}

/// The structural conversion, in execution order.
pub const STRUCTURAL_PIPELINE: &[ConversionStep] = &[
    ConversionStep { name: "normalize_newlines", apply: normalize_newlines },
    ConversionStep { name: "escape_html", apply: escape_html },
    ConversionStep { name: "code_blocks", apply: code_blocks },
    ConversionStep { name: "headings", apply: headings },
    ConversionStep { name: "numbered_items", apply: numbered_items },
    ConversionStep { name: "bold_italic", apply: bold_italic },
    ConversionStep { name: "bold", apply: bold },
    ConversionStep { name: "italic", apply: italic },
    ConversionStep { name: "blank_lines", apply: blank_lines },
    ConversionStep { name: "trim", apply: trim },
];

static CODE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(?:[A-Za-z0-9_+\-]*\n)?(.*?)```").expect("hardcoded regex")
});
static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*#{1,6}[ \t]+(.+?)(?:[ \t]+#+)?[ \t]*$").expect("hardcoded regex")
});
static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^([ \t]*)(\d+)\.[ \t]+").expect("hardcoded regex"));
// Span contents never include `<` or `>`, so a new tag cannot straddle one inserted earlier.
static BOLD_ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*\*([^*<>\n]+?)\*\*\*").expect("hardcoded regex"));
static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^<>\n]+?)\*\*").expect("hardcoded regex"));
// `\B` beside `*` requires a non-word neighbour, so `5*3*2` stays arithmetic.
static ITALIC_STAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\B\*([^*\s<>](?:[^*\n<>]*?[^*\s<>])?)\*\B").expect("hardcoded regex")
});
// `\b` around `_` keeps snake_case identifiers intact.
static ITALIC_UNDERSCORE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b_([^_\s<>](?:[^_\n<>]*?[^_\s<>])?)_\b").expect("hardcoded regex")
});
static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n(?:[ \t]*\n)+").expect("hardcoded regex"));

/// Converts LLM-style Markdown into the HTML subset Telegram renders.
pub fn markdown_to_html(text: &str) -> String {
    STRUCTURAL_PIPELINE
        .iter()
        .fold(text.to_string(), |acc, step| (step.apply)(&acc))
}

/// Applies `f` to every part of `text` outside `<pre>…</pre>`; blocks are copied as-is.
fn map_outside_pre(text: &str, f: impl Fn(&str) -> String) -> String {
    const OPEN: &str = "<pre>";
    const CLOSE: &str = "</pre>";

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find(OPEN) {
        out.push_str(&f(&rest[..start]));
        match rest[start..].find(CLOSE) {
            Some(rel_end) => {
                let end = start + rel_end + CLOSE.len();
                out.push_str(&rest[start..end]);
                rest = &rest[end..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(&f(rest));
    out
}

pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n")
}

/// ```` ```lang\ncode``` ```` → `<pre>code</pre>`; the language tag and the newline before the
/// closing fence are dropped.
pub fn code_blocks(text: &str) -> String {
    CODE_BLOCK
        .replace_all(text, |caps: &Captures| {
            let code = caps[1].strip_suffix('\n').unwrap_or(&caps[1]);
            format!("<pre>{}</pre>", code)
        })
        .into_owned()
}

/// `## Title` → `<b>Title</b>`.
pub fn headings(text: &str) -> String {
    map_outside_pre(text, |s| HEADING.replace_all(s, "<b>$1</b>").into_owned())
}

/// `1. item` → `<b>1.</b> item`.
pub fn numbered_items(text: &str) -> String {
    map_outside_pre(text, |s| {
        NUMBERED_ITEM
            .replace_all(s, "${1}<b>${2}.</b> ")
            .into_owned()
    })
}

/// `***x***` → `<b><i>x</i></b>`.
pub fn bold_italic(text: &str) -> String {
    map_outside_pre(text, |s| {
        BOLD_ITALIC
            .replace_all(s, "<b><i>$1</i></b>")
            .into_owned()
    })
}

/// `**x**` → `<b>x</b>`.
pub fn bold(text: &str) -> String {
    map_outside_pre(text, |s| BOLD.replace_all(s, "<b>$1</b>").into_owned())
}

/// `*x*` and `_x_` → `<i>x</i>`.
pub fn italic(text: &str) -> String {
    map_outside_pre(text, |s| {
        let s = ITALIC_STAR.replace_all(s, "<i>$1</i>");
        ITALIC_UNDERSCORE.replace_all(&s, "<i>$1</i>").into_owned()
    })
}

/// Collapses runs of blank lines into a single line break.
pub fn blank_lines(text: &str) -> String {
    BLANK_LINES.replace_all(text, "\n").into_owned()
}

pub fn trim(text: &str) -> String {
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_converts_double_asterisks() {
        assert_eq!(bold("a **b** c"), "a <b>b</b> c");
        assert_eq!(bold("**one** and **two**"), "<b>one</b> and <b>two</b>");
    }

    #[test]
    fn test_italic_star_and_underscore() {
        assert_eq!(italic("an *emphasis* here"), "an <i>emphasis</i> here");
        assert_eq!(italic("an _emphasis_ here"), "an <i>emphasis</i> here");
    }

    #[test]
    fn test_italic_leaves_snake_case_and_arithmetic() {
        assert_eq!(italic("call my_func_name now"), "call my_func_name now");
        assert_eq!(italic("2 * 3 * 4"), "2 * 3 * 4");
        assert_eq!(italic("5*3*2 = 30"), "5*3*2 = 30");
        assert_eq!(italic("(*aside*)"), "(<i>aside</i>)");
    }

    #[test]
    fn test_bold_italic_nests_tags() {
        assert_eq!(bold_italic("a ***b*** c"), "a <b><i>b</i></b> c");
        assert_eq!(bold_italic("**b**"), "**b**");
    }

    #[test]
    fn test_spans_do_not_cross_tags() {
        assert_eq!(italic("<b>a *b</b> c*"), "<b>a *b</b> c*");
        assert_eq!(bold("<b>x**</b> y**"), "<b>x**</b> y**");
    }

    #[test]
    fn test_italic_before_bold_would_break_bold() {
        // Running italic first leaves stray asterisks around the span; the pipeline order avoids this.
        let wrong_order = bold(&italic("**x**"));
        assert_ne!(wrong_order, "<b>x</b>");
        assert_eq!(italic(&bold("**x**")), "<b>x</b>");
    }

    #[test]
    fn test_headings_all_levels() {
        assert_eq!(headings("# One"), "<b>One</b>");
        assert_eq!(headings("###### Six\nbody"), "<b>Six</b>\nbody");
        assert_eq!(headings("## Closed ##"), "<b>Closed</b>");
        assert_eq!(headings("# C#"), "<b>C#</b>");
        assert_eq!(headings("## Why F# ##"), "<b>Why F#</b>");
        assert_eq!(headings("####### seven"), "####### seven");
        assert_eq!(headings("#hashtag"), "#hashtag");
    }

    #[test]
    fn test_numbered_items_bold_ordinal_only() {
        assert_eq!(
            numbered_items("1. First\n2. Second\n"),
            "<b>1.</b> First\n<b>2.</b> Second\n"
        );
        assert_eq!(numbered_items("version 1. thing"), "version 1. thing");
    }

    #[test]
    fn test_code_blocks_drop_language_tag() {
        assert_eq!(
            code_blocks("```rust\nfn main() {}\n```"),
            "<pre>fn main() {}</pre>"
        );
        assert_eq!(code_blocks("```inline```"), "<pre>inline</pre>");
    }

    #[test]
    fn test_inline_steps_skip_pre_blocks() {
        let text = "<pre>let x = **y** * 2;\n# not a heading</pre> **bold**";
        assert_eq!(
            headings(&italic(&bold(text))),
            "<pre>let x = **y** * 2;\n# not a heading</pre> <b>bold</b>"
        );
    }

    #[test]
    fn test_blank_lines_collapse() {
        assert_eq!(blank_lines("a\n\n\n\nb"), "a\nb");
        assert_eq!(blank_lines("a\n  \n\t\nb"), "a\nb");
        assert_eq!(blank_lines("a\nb"), "a\nb");
    }

    #[test]
    fn test_pipeline_order() {
        let names: Vec<&str> = STRUCTURAL_PIPELINE.iter().map(|s| s.name).collect();
        let pos = |n: &str| names.iter().position(|x| *x == n).unwrap();
        assert!(pos("escape_html") < pos("code_blocks"));
        assert!(pos("bold_italic") < pos("bold"));
        assert!(pos("bold") < pos("italic"));
        assert_eq!(names.last(), Some(&"trim"));
    }
}
