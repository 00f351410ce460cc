//! Token model shared by every tokenizer.
use serde::{Deserialize, Serialize};

/// Classification of a token. Closed set: every tokenizer and every palette
/// speaks exactly these kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Object key (a quoted string followed by `:`), env/YAML keys, CSS properties.
    Key,
    String,
    Number,
    Boolean,
    Null,
    Bracket,
    Punctuation,
    Operator,
    Tag,
    Attribute,
    Keyword,
    Comment,
    Variable,
    Heading,
    Emphasis,
    Link,
    Code,
    /// Unclassified text, including the gaps between classified matches.
    Text,
    // Character-class kinds used by the random-string presentation mode.
    Digit,
    Uppercase,
    Lowercase,
    Symbol,
}

impl TokenKind {
    pub const ALL: [TokenKind; 22] = [
        Self::Key,
        Self::String,
        Self::Number,
        Self::Boolean,
        Self::Null,
        Self::Bracket,
        Self::Punctuation,
        Self::Operator,
        Self::Tag,
        Self::Attribute,
        Self::Keyword,
        Self::Comment,
        Self::Variable,
        Self::Heading,
        Self::Emphasis,
        Self::Link,
        Self::Code,
        Self::Text,
        Self::Digit,
        Self::Uppercase,
        Self::Lowercase,
        Self::Symbol,
    ];

    /// Stable snake_case name, matching the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            Self::Key => "key",
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Null => "null",
            Self::Bracket => "bracket",
            Self::Punctuation => "punctuation",
            Self::Operator => "operator",
            Self::Tag => "tag",
            Self::Attribute => "attribute",
            Self::Keyword => "keyword",
            Self::Comment => "comment",
            Self::Variable => "variable",
            Self::Heading => "heading",
            Self::Emphasis => "emphasis",
            Self::Link => "link",
            Self::Code => "code",
            Self::Text => "text",
            Self::Digit => "digit",
            Self::Uppercase => "uppercase",
            Self::Lowercase => "lowercase",
            Self::Symbol => "symbol",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified slice of exactly one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Concatenates token texts. For any tokenizer output this reproduces the line.
pub fn join_text(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}
