//! One loose grammar for C-family source (and the scripting languages that
//! look close enough). Keywords come from a single list shared by every
//! language.
use std::sync::LazyLock;

use regex::Regex;

use super::{compile, scan};
use crate::token::{Token, TokenKind};

// `#` opens a comment only as the first non-blank character, unless it
// introduces a preprocessor directive.
static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r#"(?x)
        (?P<directive>^[\ \t]*\#[\ \t]*(?:include|define|undef|ifdef|ifndef|if|elif|else|endif|pragma|region|endregion)\b)
        | (?P<hash>^[\ \t]*\#.*$)
        | (?P<comment>//.*$|/\*.*?(?:\*/|$))
        | (?P<string>"(?:[^"\\]|\\.)*"|`(?:[^`\\]|\\.)*`|'(?:[^'\\]|\\.)*')
        | (?P<number>(?:0[xX][0-9A-Fa-f_]+|0[bB][01_]+|\d[\d_]*(?:\.\d+)?(?:[eE][+-]?\d+)?)[A-Za-z0-9]*)
        | (?P<decorator>@[A-Za-z_][\w.]*)
        | (?P<word>[A-Za-z_$][\w$]*)
        | (?P<bracket>[{}()\[\]])
        | (?P<op>=>|->|::|===|!==|==|!=|<=|>=|&&|\|\||\+\+|--|[-+*/%=<>!&|^~?:])
        | (?P<punct>[;,.])
        "#,
    )
});

const KEYWORDS: &[&str] = &[
    "abstract", "and", "as", "async", "await", "break", "case", "catch", "class", "const",
    "continue", "crate", "def", "default", "defer", "del", "delete", "do", "dyn", "elif", "else",
    "enum", "except", "export", "extends", "extern", "final", "finally", "fn", "for", "from",
    "func", "function", "go", "if", "impl", "implements", "import", "in", "instanceof",
    "interface", "is", "lambda", "let", "loop", "match", "mod", "module", "mut", "namespace",
    "new", "not", "or", "override", "package", "pass", "private", "protected", "pub", "public",
    "raise", "readonly", "return", "sealed", "self", "static", "struct", "super", "switch",
    "this", "throw", "throws", "trait", "try", "type", "typeof", "unsafe", "use", "using", "val",
    "var", "virtual", "void", "when", "where", "while", "with", "yield",
];

const BOOLEANS: &[&str] = &["true", "false", "True", "False"];
const NULLS: &[&str] = &["null", "nil", "None", "undefined", "NULL", "nullptr"];

fn word_kind(word: &str) -> Option<TokenKind> {
    if KEYWORDS.contains(&word) {
        Some(TokenKind::Keyword)
    } else if BOOLEANS.contains(&word) {
        Some(TokenKind::Boolean)
    } else if NULLS.contains(&word) {
        Some(TokenKind::Null)
    } else {
        None
    }
}

pub(super) fn tokenize(line: &str) -> Vec<Token> {
    scan(line, &PATTERN, |caps, out| {
        if let Some(m) = caps.name("directive") {
            let directive = m.as_str().trim_start();
            out.span(TokenKind::Keyword, m.end() - directive.len(), m.end());
        } else if let Some(m) = caps.name("hash") {
            let comment = m.as_str().trim_start();
            out.span(TokenKind::Comment, m.end() - comment.len(), m.end());
        } else if let Some(m) = caps.name("comment") {
            out.emit(TokenKind::Comment, m);
        } else if let Some(m) = caps.name("string") {
            out.emit(TokenKind::String, m);
        } else if let Some(m) = caps.name("number") {
            out.emit(TokenKind::Number, m);
        } else if let Some(m) = caps.name("decorator") {
            out.emit(TokenKind::Attribute, m);
        } else if let Some(m) = caps.name("word") {
            if let Some(kind) = word_kind(m.as_str()) {
                out.emit(kind, m);
            }
        } else if let Some(m) = caps.name("bracket") {
            out.emit(TokenKind::Bracket, m);
        } else if let Some(m) = caps.name("op") {
            out.emit(TokenKind::Operator, m);
        } else if let Some(m) = caps.name("punct") {
            out.emit(TokenKind::Punctuation, m);
        }
    })
}
