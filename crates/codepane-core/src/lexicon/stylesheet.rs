//! CSS (and close-enough SCSS/LESS) lines.
use std::sync::LazyLock;

use regex::Regex;

use super::{compile, scan};
use crate::token::{Token, TokenKind};

// A property is a name whose colon is followed by whitespace or the end of
// the line, which keeps `a:hover` a selector. The trailing `word` branch
// swallows identifiers so digits inside them (`h1`) are not numbers.
static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r#"(?x)
        (?P<comment>/\*.*?(?:\*/|$))
        | (?P<string>"(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*')
        | (?P<atrule>@[\w-]+)
        | (?P<prop>-{0,2}[A-Za-z][\w-]*)\s*(?P<colon>:)(?:\s|$)
        | (?P<color>\#[0-9A-Fa-f]{3,8}\b)
        | (?P<number>-?(?:\d+\.?\d*|\.\d+)(?:%|[A-Za-z]+)?)
        | (?P<important>!important\b)
        | (?P<selector>[.\#][A-Za-z_-][\w-]*)
        | (?P<pseudo>::?[A-Za-z-][\w-]*)
        | (?P<bracket>[{}()\[\]])
        | (?P<punct>[;,:>+~])
        | (?P<word>[\w-]+)
        "#,
    )
});

pub(super) fn tokenize(line: &str) -> Vec<Token> {
    scan(line, &PATTERN, |caps, out| {
        if let Some(m) = caps.name("comment") {
            out.emit(TokenKind::Comment, m);
        } else if let Some(m) = caps.name("string") {
            out.emit(TokenKind::String, m);
        } else if let Some(m) = caps.name("atrule") {
            out.emit(TokenKind::Keyword, m);
        } else if caps.name("prop").is_some() {
            out.group(TokenKind::Key, caps, "prop");
            out.group(TokenKind::Punctuation, caps, "colon");
        } else if let Some(m) = caps.name("color").or_else(|| caps.name("number")) {
            out.emit(TokenKind::Number, m);
        } else if let Some(m) = caps.name("important") {
            out.emit(TokenKind::Keyword, m);
        } else if let Some(m) = caps.name("selector") {
            out.emit(TokenKind::Tag, m);
        } else if let Some(m) = caps.name("pseudo") {
            out.emit(TokenKind::Attribute, m);
        } else if let Some(m) = caps.name("bracket") {
            out.emit(TokenKind::Bracket, m);
        } else if let Some(m) = caps.name("punct") {
            out.emit(TokenKind::Punctuation, m);
        }
    })
}
