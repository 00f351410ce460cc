//! Dotenv lines: `KEY=value`, optional `export`, `#` comments.
use std::sync::LazyLock;

use regex::Regex;

use super::{compile, Emitter};
use crate::token::{Token, TokenKind};

static ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"^\s*(?:(?P<export>export)\s+)?(?P<key>[A-Za-z_][A-Za-z0-9_.-]*)\s*(?P<eq>=)(?P<value>.*)$",
    )
});

pub(super) fn tokenize(line: &str) -> Vec<Token> {
    let mut out = Emitter::new(line);
    if line.trim_start().starts_with('#') {
        out.span(TokenKind::Comment, 0, line.len());
        return out.finish();
    }
    let Some(caps) = ASSIGNMENT.captures(line) else {
        return out.finish();
    };
    out.group(TokenKind::Keyword, &caps, "export");
    out.group(TokenKind::Key, &caps, "key");
    out.group(TokenKind::Punctuation, &caps, "eq");
    if let Some(value) = caps.name("value") {
        value_tokens(&mut out, value.as_str(), value.start());
    }
    out.finish()
}

/// Splits a value (starting at byte `at`) into the value itself and an
/// optional trailing comment.
fn value_tokens(out: &mut Emitter<'_>, value: &str, at: usize) {
    let body = value.trim_start();
    let start = at + value.len() - body.len();
    let value_end = match body.chars().next() {
        Some(q @ ('"' | '\'')) => closing_quote(body, q).map(|end| start + end),
        Some(_) => {
            let end = unquoted_end(body);
            Some(start + body[..end].trim_end().len())
        }
        None => None,
    };
    let Some(value_end) = value_end else {
        // Unterminated quote: the rest of the line is the value.
        out.span(TokenKind::String, start, at + value.len());
        return;
    };
    out.span(TokenKind::String, start, value_end);
    let tail = &value[value_end - at..];
    if let Some(hash) = tail.find('#') {
        if tail[..hash].trim().is_empty() {
            out.span(TokenKind::Comment, value_end + hash, at + value.len());
        }
    }
}

/// Byte offset just past the quote that closes `body` (which opens with `q`).
fn closing_quote(body: &str, q: char) -> Option<usize> {
    let mut escaped = false;
    for (i, c) in body.char_indices().skip(1) {
        if escaped {
            escaped = false;
        } else if c == '\\' && q == '"' {
            escaped = true;
        } else if c == q {
            return Some(i + c.len_utf8());
        }
    }
    None
}

/// End of an unquoted value: the first `#` preceded by whitespace.
fn unquoted_end(body: &str) -> usize {
    let mut prev_space = false;
    for (i, c) in body.char_indices() {
        if c == '#' && prev_space {
            return i;
        }
        prev_space = c.is_whitespace();
    }
    body.len()
}
