//! Per-language line tokenizers.
//!
//! Every tokenizer is a pure function from one line to an ordered token list.
//! Most are a single alternation regex scanned left to right: text skipped
//! between matches becomes [`TokenKind::Text`], and the branch that fired
//! decides the kind of the match. Branch order is the tie-break: at a given
//! position the first branch that matches wins, not the longest.
//!
//! Compiled patterns are immutable statics and every scan owns its iterator,
//! so interleaved calls for different languages cannot disturb each other.

mod csv;
mod env;
mod json;
mod markdown;
mod markup;
mod random;
mod shell;
mod source;
mod sql;
mod stylesheet;
mod yaml;

use regex::{Captures, Match, Regex};

use crate::language::Language;
use crate::token::{Token, TokenKind};

/// Tokenizes one line (without its line terminator) in `language`.
///
/// Total and lossless: never panics, and the token texts concatenate back to
/// `line`.
pub fn tokenize(language: Language, line: &str) -> Vec<Token> {
    match language {
        Language::Json => json::tokenize(line),
        Language::Xml | Language::Html | Language::Svg => markup::tokenize(line),
        Language::Css => stylesheet::tokenize(line),
        Language::Sql => sql::tokenize(line),
        Language::Yaml => yaml::tokenize(line),
        Language::Markdown => markdown::tokenize(line),
        Language::Env => env::tokenize(line),
        Language::Csv => csv::tokenize(line),
        Language::Shell => shell::tokenize(line),
        Language::Code => source::tokenize(line),
        Language::PlainText => plain(line),
        Language::RandomString => random::tokenize(line),
    }
}

/// One token for the whole line; nothing for an empty one.
fn plain(line: &str) -> Vec<Token> {
    Emitter::new(line).finish()
}

/// Builds a token list over `line` while guaranteeing losslessness.
///
/// The emitter owns a byte cursor. Emitting a span first flushes the text
/// between the cursor and the span as [`TokenKind::Text`]; spans that start
/// behind the cursor are ignored, and [`Emitter::finish`] flushes the tail.
pub(crate) struct Emitter<'t> {
    line: &'t str,
    cursor: usize,
    tokens: Vec<Token>,
}

impl<'t> Emitter<'t> {
    pub(crate) fn new(line: &'t str) -> Self {
        Self {
            line,
            cursor: 0,
            tokens: Vec::new(),
        }
    }

    /// Emits the byte range `start..end` as `kind`. Ranges that are empty,
    /// behind the cursor, or not on char boundaries are skipped and later
    /// surface as text.
    pub(crate) fn span(&mut self, kind: TokenKind, start: usize, end: usize) {
        let end = end.min(self.line.len());
        if start < self.cursor
            || start >= end
            || !self.line.is_char_boundary(start)
            || !self.line.is_char_boundary(end)
        {
            return;
        }
        self.text_to(start);
        self.push(kind, start, end);
        self.cursor = end;
    }

    pub(crate) fn emit(&mut self, kind: TokenKind, m: Match<'_>) {
        self.span(kind, m.start(), m.end());
    }

    /// Emits a capture group if it participated in the match.
    pub(crate) fn group(&mut self, kind: TokenKind, caps: &Captures<'_>, name: &str) {
        if let Some(m) = caps.name(name) {
            self.emit(kind, m);
        }
    }

    /// Emits everything up to `end` as plain text.
    pub(crate) fn text_to(&mut self, end: usize) {
        let end = end.min(self.line.len());
        if end > self.cursor && self.line.is_char_boundary(end) {
            self.push(TokenKind::Text, self.cursor, end);
            self.cursor = end;
        }
    }

    pub(crate) fn finish(mut self) -> Vec<Token> {
        self.text_to(self.line.len());
        self.tokens
    }

    fn push(&mut self, kind: TokenKind, start: usize, end: usize) {
        if let Some(text) = self.line.get(start..end) {
            self.tokens.push(Token::new(kind, text));
        }
    }
}

/// Runs `pattern` over `line`, letting `classify` emit tokens for each match.
///
/// Anything `classify` leaves unemitted inside a match, and every gap between
/// matches, comes out as text.
pub(crate) fn scan<F>(line: &str, pattern: &Regex, mut classify: F) -> Vec<Token>
where
    F: FnMut(&Captures<'_>, &mut Emitter<'_>),
{
    let mut out = Emitter::new(line);
    for caps in pattern.captures_iter(line) {
        classify(&caps, &mut out);
    }
    out.finish()
}

/// Compiles a static pattern. Patterns are literals covered by tests.
pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("tokenizer pattern must compile")
}

#[cfg(test)]
pub(crate) mod test_util {
    use crate::token::{join_text, Token, TokenKind};

    /// `(kind, text)` pairs, for compact assertions.
    pub fn pairs(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
        tokens.iter().map(|t| (t.kind, t.text.as_str())).collect()
    }

    /// Texts of the tokens with the given kind.
    pub fn texts_of(tokens: &[Token], kind: TokenKind) -> Vec<&str> {
        tokens
            .iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.text.as_str())
            .collect()
    }

    pub fn assert_lossless(line: &str, tokens: &[Token]) {
        assert_eq!(join_text(tokens), line, "tokens: {tokens:?}");
        assert!(tokens.iter().all(|t| !t.text.is_empty()));
    }
}

#[cfg(test)]
mod tests {
    use super::test_util::*;
    use super::*;

    #[test]
    fn test_plain_is_one_token_per_line() {
        let tokens = tokenize(Language::PlainText, "just some words");
        assert_eq!(pairs(&tokens), vec![(TokenKind::Text, "just some words")]);
    }

    #[test]
    fn test_plain_empty_line_has_no_tokens() {
        assert!(tokenize(Language::PlainText, "").is_empty());
    }

    #[test]
    fn test_emitter_fills_gaps_with_text() {
        let mut out = Emitter::new("ab cd ef");
        out.span(TokenKind::Keyword, 3, 5);
        let tokens = out.finish();
        assert_eq!(
            pairs(&tokens),
            vec![
                (TokenKind::Text, "ab "),
                (TokenKind::Keyword, "cd"),
                (TokenKind::Text, " ef"),
            ]
        );
    }

    #[test]
    fn test_emitter_ignores_backwards_and_empty_spans() {
        let mut out = Emitter::new("abcdef");
        out.span(TokenKind::Keyword, 2, 4);
        out.span(TokenKind::Number, 1, 3);
        out.span(TokenKind::Number, 5, 5);
        out.span(TokenKind::String, 4, 100);
        let tokens = out.finish();
        assert_lossless("abcdef", &tokens);
        assert_eq!(
            pairs(&tokens),
            vec![
                (TokenKind::Text, "ab"),
                (TokenKind::Keyword, "cd"),
                (TokenKind::String, "ef"),
            ]
        );
    }

    #[test]
    fn test_emitter_non_char_boundary_degrades_to_text() {
        // 'é' is two bytes; a span starting inside it is dropped, not a panic.
        let line = "é1";
        let mut out = Emitter::new(line);
        out.span(TokenKind::Number, 1, 3);
        let tokens = out.finish();
        assert_lossless(line, &tokens);
        assert_eq!(pairs(&tokens), vec![(TokenKind::Text, "é1")]);
    }

    #[test]
    fn test_interleaved_languages_do_not_interfere() {
        let json_line = r#"{"a": 1, "b": [true, null]}"#;
        let sql_line = "SELECT a FROM t WHERE b = 'x'";
        let first_json = tokenize(Language::Json, json_line);
        let first_sql = tokenize(Language::Sql, sql_line);
        for _ in 0..3 {
            assert_eq!(tokenize(Language::Json, json_line), first_json);
            assert_eq!(tokenize(Language::Sql, sql_line), first_sql);
        }
    }
}
