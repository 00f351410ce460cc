//! SQL lines. Only words on the reserved list are keywords, matched without
//! regard to case; every other identifier is text.
use std::sync::LazyLock;

use regex::Regex;

use super::{compile, scan};
use crate::token::{Token, TokenKind};

static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r#"(?x)
        (?P<comment>--.*$|/\*.*?(?:\*/|$))
        | (?P<string>'(?:[^']|'')*')
        | (?P<number>\b\d+(?:\.\d+)?\b)
        | (?P<word>[A-Za-z_][\w$]*)
        | (?P<op><>|<=|>=|!=|\|\||::|[=<>+\-*/%])
        | (?P<bracket>[()])
        | (?P<punct>[,;.])
        "#,
    )
});

const RESERVED: &[&str] = &[
    "ADD", "ALL", "ALTER", "AND", "ANY", "AS", "ASC", "AVG", "BEGIN", "BETWEEN", "BIGINT",
    "BOOLEAN", "BY", "CASCADE", "CASE", "CAST", "CHAR", "CHECK", "COALESCE", "COLUMN", "COMMIT",
    "CONSTRAINT", "COUNT", "CREATE", "CROSS", "DATABASE", "DATE", "DECIMAL", "DEFAULT", "DELETE",
    "DESC", "DISTINCT", "DROP", "ELSE", "END", "EXCEPT", "EXISTS", "FALSE", "FETCH", "FOREIGN",
    "FROM", "FULL", "GRANT", "GROUP", "HAVING", "IF", "ILIKE", "IN", "INDEX", "INNER", "INSERT",
    "INT", "INTEGER", "INTERSECT", "INTO", "IS", "JOIN", "KEY", "LEFT", "LIKE", "LIMIT", "MAX",
    "MIN", "NOT", "NULL", "OFFSET", "ON", "OR", "ORDER", "OUTER", "OVER", "PARTITION", "PRIMARY",
    "REFERENCES", "RETURNING", "REVOKE", "RIGHT", "ROLLBACK", "SELECT", "SET", "SUM", "TABLE",
    "TEXT", "THEN", "TIMESTAMP", "TOP", "TRANSACTION", "TRUE", "TRUNCATE", "UNION", "UNIQUE",
    "UPDATE", "USING", "VALUES", "VARCHAR", "VIEW", "WHEN", "WHERE", "WITH",
];

fn is_reserved(word: &str) -> bool {
    RESERVED.iter().any(|kw| kw.eq_ignore_ascii_case(word))
}

pub(super) fn tokenize(line: &str) -> Vec<Token> {
    scan(line, &PATTERN, |caps, out| {
        if let Some(m) = caps.name("comment") {
            out.emit(TokenKind::Comment, m);
        } else if let Some(m) = caps.name("string") {
            out.emit(TokenKind::String, m);
        } else if let Some(m) = caps.name("number") {
            out.emit(TokenKind::Number, m);
        } else if let Some(m) = caps.name("word") {
            if is_reserved(m.as_str()) {
                out.emit(TokenKind::Keyword, m);
            }
        } else if let Some(m) = caps.name("op") {
            out.emit(TokenKind::Operator, m);
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
    fn test_keywords_match_regardless_of_case() {
        let line = "select * from Users";
        let tokens = tokenize(line);
        assert_lossless(line, &tokens);
        assert_eq!(
            pairs(&tokens),
            vec![
                (TokenKind::Keyword, "select"),
                (TokenKind::Text, " "),
                (TokenKind::Operator, "*"),
                (TokenKind::Text, " "),
                (TokenKind::Keyword, "from"),
                (TokenKind::Text, " Users"),
            ]
        );
    }

    #[test]
    fn test_strings_with_doubled_quotes() {
        let line = "WHERE name = 'O''Brien' AND age >= 21;";
        let tokens = tokenize(line);
        assert_lossless(line, &tokens);
        assert_eq!(texts_of(&tokens, TokenKind::String), vec!["'O''Brien'"]);
        assert_eq!(texts_of(&tokens, TokenKind::Keyword), vec!["WHERE", "AND"]);
        assert_eq!(texts_of(&tokens, TokenKind::Operator), vec!["=", ">="]);
        assert_eq!(texts_of(&tokens, TokenKind::Number), vec!["21"]);
        assert_eq!(texts_of(&tokens, TokenKind::Punctuation), vec![";"]);
    }

    #[test]
    fn test_line_comment_runs_to_end() {
        let line = "SELECT 1 -- pick one";
        let tokens = tokenize(line);
        assert_eq!(texts_of(&tokens, TokenKind::Comment), vec!["-- pick one"]);
    }

    #[test]
    fn test_identifiers_containing_keywords_stay_text() {
        let line = "SELECT order_id, fromage FROM t1";
        let tokens = tokenize(line);
        assert_eq!(texts_of(&tokens, TokenKind::Keyword), vec!["SELECT", "FROM"]);
        assert!(texts_of(&tokens, TokenKind::Number).is_empty());
    }

    #[test]
    fn test_null_and_booleans_are_reserved() {
        let tokens = tokenize("VALUES (NULL, true)");
        assert_eq!(
            texts_of(&tokens, TokenKind::Keyword),
            vec!["VALUES", "NULL", "true"]
        );
        assert_eq!(texts_of(&tokens, TokenKind::Bracket), vec!["(", ")"]);
    }
}
