//! CSV rows, split naively on every comma.
//!
//! Commas inside quoted fields still split the field. Rows that rely on
//! RFC 4180 quoting come out partly as text.
use super::Emitter;
use crate::token::{Token, TokenKind};

pub(super) fn tokenize(line: &str) -> Vec<Token> {
    let mut out = Emitter::new(line);
    let mut start = 0;
    for (i, field) in line.split(',').enumerate() {
        if i > 0 {
            out.span(TokenKind::Punctuation, start - 1, start);
        }
        let trimmed = field.trim();
        let kind = field_kind(trimmed);
        if kind != TokenKind::Text {
            let lead = field.len() - field.trim_start().len();
            out.span(kind, start + lead, start + lead + trimmed.len());
        }
        start += field.len() + 1;
    }
    out.finish()
}

fn field_kind(field: &str) -> TokenKind {
    let quoted = field.len() >= 2
        && ((field.starts_with('"') && field.ends_with('"'))
            || (field.starts_with('\'') && field.ends_with('\'')));
    if quoted {
        TokenKind::String
    } else if is_numeric(field) {
        TokenKind::Number
    } else {
        TokenKind::Text
    }
}

fn is_numeric(field: &str) -> bool {
    field.bytes().any(|b| b.is_ascii_digit()) && field.parse::<f64>().is_ok()
}
