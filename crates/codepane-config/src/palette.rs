//! Token kind to color, for both presentation modes.
use codepane_core::{PresentationMode, TokenKind};

use crate::color::HexColor;
use crate::theme::ThemeDefinition;

/// Color of a token of `kind` under `mode`.
///
/// Total: every kind has a color in both modes. In random-string mode the
/// four character-class kinds take the random palette and anything else is
/// painted as plain text; in syntactic mode the class kinds borrow their
/// nearest syntactic color.
pub fn style_of(theme: &ThemeDefinition, kind: TokenKind, mode: PresentationMode) -> HexColor {
    match mode {
        PresentationMode::RandomString => random_color(theme, kind),
        PresentationMode::Syntactic => syntactic_color(theme, kind),
    }
}

fn random_color(theme: &ThemeDefinition, kind: TokenKind) -> HexColor {
    let r = &theme.random;
    match kind {
        TokenKind::Digit => r.digit,
        TokenKind::Uppercase => r.uppercase,
        TokenKind::Lowercase => r.lowercase,
        TokenKind::Symbol => r.symbol,
        TokenKind::Text
        | TokenKind::Key
        | TokenKind::String
        | TokenKind::Number
        | TokenKind::Boolean
        | TokenKind::Null
        | TokenKind::Bracket
        | TokenKind::Punctuation
        | TokenKind::Operator
        | TokenKind::Tag
        | TokenKind::Attribute
        | TokenKind::Keyword
        | TokenKind::Comment
        | TokenKind::Variable
        | TokenKind::Heading
        | TokenKind::Emphasis
        | TokenKind::Link
        | TokenKind::Code => theme.syntax.text,
    }
}

fn syntactic_color(theme: &ThemeDefinition, kind: TokenKind) -> HexColor {
    let s = &theme.syntax;
    match kind {
        TokenKind::Key => s.key,
        TokenKind::String => s.string,
        TokenKind::Number | TokenKind::Digit => s.number,
        TokenKind::Boolean => s.boolean,
        TokenKind::Null => s.null,
        TokenKind::Bracket => s.bracket,
        TokenKind::Punctuation | TokenKind::Symbol => s.punctuation,
        TokenKind::Operator => s.operator,
        TokenKind::Tag => s.tag,
        TokenKind::Attribute => s.attribute,
        TokenKind::Keyword => s.keyword,
        TokenKind::Comment => s.comment,
        TokenKind::Variable => s.variable,
        TokenKind::Heading => s.heading,
        TokenKind::Emphasis => s.emphasis,
        TokenKind::Link => s.link,
        TokenKind::Code => s.code,
        TokenKind::Text | TokenKind::Uppercase | TokenKind::Lowercase => s.text,
    }
}
