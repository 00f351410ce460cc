//! HTML, XML and SVG share one markup tokenizer.
//!
//! Attribute names, values and closing brackets only count inside a tag;
//! between tags everything is text. A line whose first angle bracket is `>`
//! (or that opens with `name="`) is treated as the continuation of a tag
//! started on an earlier line.
use std::sync::LazyLock;

use regex::Regex;

use super::{compile, scan};
use crate::token::{Token, TokenKind};

static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r#"(?x)
        (?P<comment><!--.*?(?:-->|$))
        | (?P<decl><[!?][^>]*>?)
        | (?P<open></?)(?P<tag>[A-Za-z][\w:.-]*)
        | (?P<attr>[A-Za-z_:@][\w:.-]*)\s*(?P<eq>=)
        | (?P<string>"[^"<]*"|'[^'<]*')
        | (?P<close>/?>)
        "#,
    )
});

static CONTINUATION: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"^\s*[A-Za-z_:@][\w:.-]*\s*=\s*["']"#));

pub(super) fn tokenize(line: &str) -> Vec<Token> {
    let mut in_tag = starts_inside_tag(line);
    scan(line, &PATTERN, |caps, out| {
        if let Some(m) = caps.name("comment") {
            out.emit(TokenKind::Comment, m);
        } else if let Some(m) = caps.name("decl") {
            out.emit(TokenKind::Keyword, m);
        } else if caps.name("tag").is_some() {
            out.group(TokenKind::Bracket, caps, "open");
            out.group(TokenKind::Tag, caps, "tag");
            in_tag = true;
        } else if !in_tag {
            // Attribute-like text, quotes and stray `>` between tags.
        } else if caps.name("attr").is_some() {
            out.group(TokenKind::Attribute, caps, "attr");
            out.group(TokenKind::Punctuation, caps, "eq");
        } else if let Some(m) = caps.name("string") {
            out.emit(TokenKind::String, m);
        } else if let Some(m) = caps.name("close") {
            out.emit(TokenKind::Bracket, m);
            in_tag = false;
        }
    })
}

fn starts_inside_tag(line: &str) -> bool {
    match line.find(['<', '>']) {
        Some(i) => line[i..].starts_with('>'),
        None => CONTINUATION.is_match(line),
    }
}
