//! Character-class runs for generated secrets. Not a grammar: each maximal
//! run of digits, uppercase, lowercase or anything else is one token.
use std::sync::LazyLock;

use regex::Regex;

use super::{compile, scan};
use crate::token::{Token, TokenKind};

static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?P<digit>[0-9]+)|(?P<upper>\p{Lu}+)|(?P<lower>\p{Ll}+)|(?P<symbol>[^0-9\p{Lu}\p{Ll}]+)")
});

pub(super) fn tokenize(line: &str) -> Vec<Token> {
    scan(line, &PATTERN, |caps, out| {
        for (name, kind) in [
            ("digit", TokenKind::Digit),
            ("upper", TokenKind::Uppercase),
            ("lower", TokenKind::Lowercase),
            ("symbol", TokenKind::Symbol),
        ] {
            out.group(kind, caps, name);
        }
    })
}
