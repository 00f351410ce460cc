//! Markdown lines: block-level markers first, then inline spans.
use std::sync::LazyLock;

use regex::Regex;

use super::{compile, Emitter};
use crate::token::{Token, TokenKind};

static FENCE: LazyLock<Regex> = LazyLock::new(|| compile(r"^[ \t]*(?:```|~~~)"));

static HEADING: LazyLock<Regex> = LazyLock::new(|| compile(r"^[ \t]{0,3}#{1,6}(?:[ \t]|$)"));

static RULE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^[ \t]{0,3}(?:(?:-[ \t]*){3,}|(?:\*[ \t]*){3,}|(?:_[ \t]*){3,})$")
});

static PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"^[ \t]*(?P<quote>>[> \t]*)?(?P<marker>(?:[-*+]|\d{1,9}[.)])(?:[ \t]+|$))?(?:(?P<task>\[[ xX]\])(?:[ \t]|$))?",
    )
});

static INLINE: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r#"(?x)
        (?P<code>`[^`]+`)
        | (?P<strong>\*\*[^*]+\*\*|__[^_]+__|~~[^~]+~~)
        | (?P<em>\*[^*\s][^*]*\*|\b_[^_\s][^_]*_\b)
        | (?P<link>!?\[[^\]]*\]\([^)]*\))
        | (?P<autolink><https?://[^>\s]+>|https?://[^\s)>\]]+)
        "#,
    )
});

pub(super) fn tokenize(line: &str) -> Vec<Token> {
    let mut out = Emitter::new(line);
    let indent = line.len() - line.trim_start().len();

    if FENCE.is_match(line) {
        out.span(TokenKind::Code, indent, line.len());
        return out.finish();
    }
    if HEADING.is_match(line) {
        out.span(TokenKind::Heading, indent, line.len());
        return out.finish();
    }
    if RULE.is_match(line) {
        out.span(TokenKind::Punctuation, indent, line.trim_end().len());
        return out.finish();
    }

    let mut inline_start = 0;
    if let Some(caps) = PREFIX.captures(line) {
        for name in ["quote", "marker", "task"] {
            if let Some(m) = caps.name(name) {
                let marker = m.as_str().trim_end();
                out.span(TokenKind::Punctuation, m.start(), m.start() + marker.len());
            }
        }
        inline_start = caps.get(0).map_or(0, |m| m.end());
    }

    for caps in INLINE.captures_iter(&line[inline_start..]) {
        let kind = if caps.name("code").is_some() {
            TokenKind::Code
        } else if caps.name("strong").is_some() || caps.name("em").is_some() {
            TokenKind::Emphasis
        } else {
            TokenKind::Link
        };
        if let Some(m) = caps.get(0) {
            out.span(kind, inline_start + m.start(), inline_start + m.end());
        }
    }
    out.finish()
}
