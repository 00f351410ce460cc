//! JSON (and JSON-like) lines.
use std::sync::LazyLock;

use regex::Regex;

use super::{compile, scan};
use crate::token::{Token, TokenKind};

// An object key is a quoted string whose next non-blank char is `:`. The key
// branch consumes the colon too and splits it off, so it must come before the
// plain string branch.
static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r#"(?x)
        (?P<key>"(?:[^"\\]|\\.)*")\s*(?P<colon>:)
        | (?P<string>"(?:[^"\\]|\\.)*")
        | (?P<number>-?\d+(?:\.\d+)?(?:[eE][+-]?\d+)?)
        | (?P<boolean>\b(?:true|false)\b)
        | (?P<null>\bnull\b)
        | (?P<bracket>[{}\[\]])
        | (?P<punct>[:,])
        "#,
    )
});

pub(super) fn tokenize(line: &str) -> Vec<Token> {
    scan(line, &PATTERN, |caps, out| {
        if caps.name("key").is_some() {
            out.group(TokenKind::Key, caps, "key");
            out.group(TokenKind::Punctuation, caps, "colon");
        } else if let Some(m) = caps.name("string") {
            out.emit(TokenKind::String, m);
        } else if let Some(m) = caps.name("number") {
            out.emit(TokenKind::Number, m);
        } else if let Some(m) = caps.name("boolean") {
            out.emit(TokenKind::Boolean, m);
        } else if let Some(m) = caps.name("null") {
            out.emit(TokenKind::Null, m);
        } else if let Some(m) = caps.name("bracket") {
            out.emit(TokenKind::Bracket, m);
        } else if let Some(m) = caps.name("punct") {
            out.emit(TokenKind::Punctuation, m);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::test_util::*;

    #[test]
    fn test_keys_and_values_are_distinguished_by_colon() {
        let line = r#"{"name": "Alice", "age": 30}"#;
        let tokens = tokenize(line);
        assert_lossless(line, &tokens);
        assert_eq!(texts_of(&tokens, TokenKind::Key), vec![r#""name""#, r#""age""#]);
        assert_eq!(texts_of(&tokens, TokenKind::String), vec![r#""Alice""#]);
        assert_eq!(texts_of(&tokens, TokenKind::Number), vec!["30"]);
        assert_eq!(texts_of(&tokens, TokenKind::Bracket), vec!["{", "}"]);
        assert_eq!(texts_of(&tokens, TokenKind::Punctuation), vec![":", ",", ":"]);
    }

    #[test]
    fn test_key_with_space_before_colon() {
        let line = r#"  "id" : 7,"#;
        let tokens = tokenize(line);
        assert_lossless(line, &tokens);
        assert_eq!(
            pairs(&tokens),
            vec![
                (TokenKind::Text, "  "),
                (TokenKind::Key, r#""id""#),
                (TokenKind::Text, " "),
                (TokenKind::Punctuation, ":"),
                (TokenKind::Text, " "),
                (TokenKind::Number, "7"),
                (TokenKind::Punctuation, ","),
            ]
        );
    }

    #[test]
    fn test_literals_and_nested_arrays() {
        let line = r#"[true, false, null, -1.5e3, "x\"y"]"#;
        let tokens = tokenize(line);
        assert_lossless(line, &tokens);
        assert_eq!(texts_of(&tokens, TokenKind::Boolean), vec!["true", "false"]);
        assert_eq!(texts_of(&tokens, TokenKind::Null), vec!["null"]);
        assert_eq!(texts_of(&tokens, TokenKind::Number), vec!["-1.5e3"]);
        assert_eq!(texts_of(&tokens, TokenKind::String), vec![r#""x\"y""#]);
    }

    #[test]
    fn test_unbalanced_quote_degrades_to_text() {
        let line = r#"{"broken: 1"#;
        let tokens = tokenize(line);
        assert_lossless(line, &tokens);
        assert!(texts_of(&tokens, TokenKind::Key).is_empty());
        assert_eq!(texts_of(&tokens, TokenKind::Bracket), vec!["{"]);
    }

    #[test]
    fn test_string_value_followed_by_comma_is_not_a_key() {
        let tokens = tokenize(r#""a", "b""#);
        assert_eq!(texts_of(&tokens, TokenKind::String), vec![r#""a""#, r#""b""#]);
        assert!(texts_of(&tokens, TokenKind::Key).is_empty());
    }
}
