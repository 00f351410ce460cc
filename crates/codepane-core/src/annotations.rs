//! Line-level error annotations supplied by the host.
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A set of 1-based line numbers to flag as erroneous.
///
/// Purely presentational: the set never feeds back into tokenization.
/// Numbers outside the document (including 0) are kept but simply never
/// match a rendered line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorLines(BTreeSet<usize>);

impl ErrorLines {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, line: usize) -> bool {
        self.0.insert(line)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Whether the 1-based `line` is flagged.
    pub fn contains(&self, line: usize) -> bool {
        self.0.contains(&line)
    }

    /// Whether the 0-based row `index` is flagged.
    pub fn contains_index(&self, index: usize) -> bool {
        index
            .checked_add(1)
            .is_some_and(|line| self.0.contains(&line))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Flagged lines in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<usize> for ErrorLines {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<usize> for ErrorLines {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}
