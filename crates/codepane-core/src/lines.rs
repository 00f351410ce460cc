//! Line splitting, per-line tokenization and its memo.
use std::sync::Arc;

use crate::language::Language;
use crate::lexicon::tokenize;
use crate::token::Token;

/// Splits `value` into physical lines.
///
/// An empty document is one empty line, and `n` newlines always give `n + 1`
/// lines. A trailing `\r` is dropped from each line so CRLF text renders
/// without stray glyphs.
pub fn compute_lines(value: &str) -> Vec<String> {
    value
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

/// Runs the lexicon over every line.
pub fn compute_line_tokens<S: AsRef<str>>(lines: &[S], language: Language) -> Vec<Vec<Token>> {
    lines
        .iter()
        .map(|line| tokenize(language, line.as_ref()))
        .collect()
}

/// Line information passed to change listeners alongside the new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeMeta {
    pub lines: Vec<String>,
    pub line_count: usize,
}

impl ChangeMeta {
    pub fn for_value(value: &str) -> Self {
        let lines = compute_lines(value);
        Self {
            line_count: lines.len(),
            lines,
        }
    }
}

/// Everything derived from one `(value, language)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSnapshot {
    pub value: String,
    pub language: Language,
    pub lines: Vec<String>,
    pub tokens: Vec<Vec<Token>>,
}

impl LineSnapshot {
    pub fn compute(value: &str, language: Language) -> Self {
        let lines = compute_lines(value);
        let tokens = compute_line_tokens(&lines, language);
        Self {
            value: value.to_owned(),
            language,
            lines,
            tokens,
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Single-entry memo of the last snapshot.
///
/// A lookup is served from the memo only when both the value and the
/// language are exactly equal to the memoized ones; any change recomputes.
#[derive(Debug, Clone, Default)]
pub struct LineCache {
    snapshot: Option<Arc<LineSnapshot>>,
    hits: u64,
    misses: u64,
}

impl LineCache {
    pub fn get(&mut self, value: &str, language: Language) -> Arc<LineSnapshot> {
        if let Some(snapshot) = &self.snapshot {
            if snapshot.language == language && snapshot.value == value {
                self.hits += 1;
                return Arc::clone(snapshot);
            }
        }
        self.misses += 1;
        let snapshot = Arc::new(LineSnapshot::compute(value, language));
        tracing::trace!(
            "Tokenized {} lines as {}",
            snapshot.line_count(),
            language.id()
        );
        self.snapshot = Some(Arc::clone(&snapshot));
        snapshot
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn clear(&mut self) {
        self.snapshot = None;
    }
}
