//! Command-line invocations: shell one-liners, `curl` calls and friends.
//!
//! The word in command position (line start, or right after a pipe or list
//! operator) is a keyword; dashed words are flags.
use std::sync::LazyLock;

use regex::Regex;

use super::{compile, scan};
use crate::token::{Token, TokenKind};

// Words swallow embedded `#`, so the comment branch only fires at a word
// boundary.
static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r#"(?x)
        (?P<comment>\#.*$)
        | (?P<string>"(?:[^"\\]|\\.)*"|'[^']*')
        | (?P<var>\$(?:\{[^}]*\}|[A-Za-z_]\w*|[0-9?\#@*$!-]))
        | (?P<op>&&|\|\||>>|[|;&<>])
        | (?P<cont>\\$)
        | (?P<word>[^\s"'$|;&<>\\]+(?:\\.[^\s"'$|;&<>\\]*)*)
        "#,
    )
});

static NUMBER: LazyLock<Regex> = LazyLock::new(|| compile(r"^\d+(?:\.\d+)?$"));

pub(super) fn tokenize(line: &str) -> Vec<Token> {
    let mut command_position = true;
    scan(line, &PATTERN, |caps, out| {
        if let Some(m) = caps.name("comment") {
            out.emit(TokenKind::Comment, m);
        } else if let Some(m) = caps.name("string") {
            out.emit(TokenKind::String, m);
            command_position = false;
        } else if let Some(m) = caps.name("var") {
            out.emit(TokenKind::Variable, m);
            command_position = false;
        } else if let Some(m) = caps.name("op") {
            out.emit(TokenKind::Operator, m);
            // Redirections take a file name, not a command.
            command_position = !matches!(m.as_str(), ">" | ">>" | "<");
        } else if let Some(m) = caps.name("cont") {
            out.emit(TokenKind::Punctuation, m);
        } else if let Some(m) = caps.name("word") {
            let word = m.as_str();
            if word.len() > 1 && word.starts_with('-') {
                out.emit(TokenKind::Attribute, m);
            } else if command_position {
                out.emit(TokenKind::Keyword, m);
            } else if NUMBER.is_match(word) {
                out.emit(TokenKind::Number, m);
            }
            command_position = false;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::test_util::*;

    #[test]
    fn test_curl_invocation() {
        let line = r#"curl -X POST https://api.example.com/items -H "Authorization: Bearer $TOKEN" \"#;
        let tokens = tokenize(line);
        assert_lossless(line, &tokens);
        assert_eq!(texts_of(&tokens, TokenKind::Keyword), vec!["curl"]);
        assert_eq!(texts_of(&tokens, TokenKind::Attribute), vec!["-X", "-H"]);
        assert_eq!(
            texts_of(&tokens, TokenKind::String),
            vec![r#""Authorization: Bearer $TOKEN""#]
        );
        assert!(texts_of(&tokens, TokenKind::Variable).is_empty());
        assert_eq!(tokens.last().map(|t| (t.kind, t.text.as_str())), Some((TokenKind::Punctuation, "\\")));
    }

    #[test]
    fn test_pipelines_variables_and_comment() {
        let line = "echo $HOME | grep -i home && ls ${DIR}; # list";
        let tokens = tokenize(line);
        assert_lossless(line, &tokens);
        assert_eq!(texts_of(&tokens, TokenKind::Keyword), vec!["echo", "grep", "ls"]);
        assert_eq!(texts_of(&tokens, TokenKind::Variable), vec!["$HOME", "${DIR}"]);
        assert_eq!(texts_of(&tokens, TokenKind::Operator), vec!["|", "&&", ";"]);
        assert_eq!(texts_of(&tokens, TokenKind::Attribute), vec!["-i"]);
        assert_eq!(texts_of(&tokens, TokenKind::Comment), vec!["# list"]);
    }

    #[test]
    fn test_numbers_and_background_operator() {
        let tokens = tokenize("sleep 10 &");
        assert_eq!(texts_of(&tokens, TokenKind::Number), vec!["10"]);
        assert_eq!(texts_of(&tokens, TokenKind::Operator), vec!["&"]);
    }

    #[test]
    fn test_hash_inside_quotes_or_words_is_not_a_comment() {
        let tokens = tokenize("git commit -m 'fix #1'");
        assert_eq!(texts_of(&tokens, TokenKind::String), vec!["'fix #1'"]);
        assert!(texts_of(&tokens, TokenKind::Comment).is_empty());
        let tokens = tokenize("echo a#b");
        assert!(texts_of(&tokens, TokenKind::Comment).is_empty());
    }

    #[test]
    fn test_redirection_target_is_not_a_command() {
        let tokens = tokenize("cat in.txt > out.txt");
        assert_eq!(texts_of(&tokens, TokenKind::Keyword), vec!["cat"]);
    }
}
