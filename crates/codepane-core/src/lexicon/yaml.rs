//! YAML lines.
//!
//! A line is read as an optional list dash, an optional `key:` head and a
//! value. The value is classified as a whole (booleans and nulls come from
//! fixed literal sets), flow collections are scanned piecewise, and anything
//! unrecognized stays text.
use std::sync::LazyLock;

use regex::Regex;

use super::{compile, Emitter};
use crate::token::{Token, TokenKind};

static HEAD: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r##"^[ \t]*(?:(?P<dash>-)(?:[ \t]+|$))?(?:(?P<key>"(?:[^"\\]|\\.)*"|'[^']*'|[^\s#'"\[\]{},:&*!|>%@`-][^:#]*?)[ \t]*(?P<colon>:)(?:[ \t]+|$))?"##,
    )
});

static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"^[-+]?(?:\d[\d_]*(?:\.\d*)?(?:[eE][-+]?\d+)?|\.\d+(?:[eE][-+]?\d+)?|0x[0-9A-Fa-f_]+|0o[0-7_]+|\.(?:inf|Inf|INF)|\.(?:nan|NaN|NAN))$",
    )
});

static QUOTED: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"^(?:"(?:[^"\\]|\\.)*"|'(?:[^']|'')*')$"#));

static BLOCK_INDICATOR: LazyLock<Regex> = LazyLock::new(|| compile(r"^[|>][-+]?\d?[-+]?$"));

static NODE_PROPERTY: LazyLock<Regex> = LazyLock::new(|| compile(r"^(?:[&*][^\s,\[\]{}]+|!\S*)"));

static FLOW: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r#"(?P<bracket>[\[\]{}])|(?P<punct>[,:])|(?P<string>"(?:[^"\\]|\\.)*"|'(?:[^']|'')*')|(?P<scalar>[^\[\]{},:"'\s][^\[\]{},:]*)"#,
    )
});

const BOOLEANS: &[&str] = &["true", "false", "yes", "no", "on", "off"];
const NULLS: &[&str] = &["null", "Null", "NULL", "~"];

pub(super) fn tokenize(line: &str) -> Vec<Token> {
    let mut out = Emitter::new(line);
    let trimmed = line.trim_start();
    let indent = line.len() - trimmed.len();

    if trimmed.starts_with('#') {
        out.span(TokenKind::Comment, indent, line.len());
        return out.finish();
    }
    if matches!(trimmed.trim_end(), "---" | "...") {
        out.span(TokenKind::Punctuation, indent, indent + 3);
        return out.finish();
    }

    let mut value_start = 0;
    if let Some(caps) = HEAD.captures(line) {
        out.group(TokenKind::Punctuation, &caps, "dash");
        out.group(TokenKind::Key, &caps, "key");
        out.group(TokenKind::Punctuation, &caps, "colon");
        value_start = caps.get(0).map_or(0, |m| m.end());
    }

    let rest = &line[value_start..];
    let (value, comment) = match comment_start(rest) {
        Some(i) => (&rest[..i], Some(value_start + i)),
        None => (rest, None),
    };
    let lead = value.len() - value.trim_start().len();
    value_tokens(&mut out, value.trim(), value_start + lead);
    if let Some(at) = comment {
        out.span(TokenKind::Comment, at, line.len());
    }
    out.finish()
}

/// Classifies the value `v`, which starts at byte `at` of the line.
fn value_tokens(out: &mut Emitter<'_>, v: &str, at: usize) {
    if v.is_empty() {
        return;
    }
    if let Some(kind) = scalar_kind(v) {
        out.span(kind, at, at + v.len());
    } else if QUOTED.is_match(v) {
        out.span(TokenKind::String, at, at + v.len());
    } else if BLOCK_INDICATOR.is_match(v) {
        out.span(TokenKind::Punctuation, at, at + v.len());
    } else if let Some(m) = NODE_PROPERTY.find(v) {
        let kind = if v.starts_with('!') {
            TokenKind::Tag
        } else {
            TokenKind::Variable
        };
        out.span(kind, at + m.start(), at + m.end());
        let tail = &v[m.end()..];
        let lead = tail.len() - tail.trim_start().len();
        value_tokens(out, tail.trim(), at + m.end() + lead);
    } else if v.starts_with('[') || v.starts_with('{') {
        flow_tokens(out, v, at);
    }
}

fn flow_tokens(out: &mut Emitter<'_>, v: &str, at: usize) {
    for caps in FLOW.captures_iter(v) {
        if let Some(m) = caps.name("bracket") {
            out.span(TokenKind::Bracket, at + m.start(), at + m.end());
        } else if let Some(m) = caps.name("punct") {
            out.span(TokenKind::Punctuation, at + m.start(), at + m.end());
        } else if let Some(m) = caps.name("string") {
            out.span(TokenKind::String, at + m.start(), at + m.end());
        } else if let Some(m) = caps.name("scalar") {
            let scalar = m.as_str().trim_end();
            if let Some(kind) = scalar_kind(scalar) {
                out.span(kind, at + m.start(), at + m.start() + scalar.len());
            }
        }
    }
}

fn scalar_kind(v: &str) -> Option<TokenKind> {
    if BOOLEANS.iter().any(|b| b.eq_ignore_ascii_case(v)) {
        Some(TokenKind::Boolean)
    } else if NULLS.contains(&v) {
        Some(TokenKind::Null)
    } else if NUMBER.is_match(v) {
        Some(TokenKind::Number)
    } else {
        None
    }
}

/// Byte offset of a `#` that starts a comment: outside quotes and preceded
/// by whitespace (or at the start of the value).
fn comment_start(value: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    let mut after_space = true;
    for (i, c) in value.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if after_space && (c == '"' || c == '\'') => quote = Some(c),
            None if after_space && c == '#' => return Some(i),
            None => {}
        }
        after_space = c.is_whitespace();
    }
    None
}
