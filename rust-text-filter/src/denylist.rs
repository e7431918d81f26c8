//! Denylist lookup for the chat filter.
//!
//! The built-in list holds the eight words the filter has always masked.
//! A plain word list (one word per line, `#` comments allowed) can replace
//! or extend it.

use crate::error::{FilterError, Result};
use crate::normalize::normalize_for_masking;
use lazy_static::lazy_static;
use log::info;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Words masked when no other list is configured.
pub const DEFAULT_WORDS: [&str; 8] = [
    "stupid",
    "failure",
    "disappointment",
    "disgrace",
    "bad",
    "disgusting",
    "disappointing",
    "creep",
];

lazy_static! {
    static ref DEFAULT_DENYLIST: Denylist = Denylist::from_words(DEFAULT_WORDS);
}

/// Set of lowercase words that must be masked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denylist {
    words: HashSet<String>,
}

impl Default for Denylist {
    fn default() -> Self {
        DEFAULT_DENYLIST.clone()
    }
}

impl Denylist {
    /// Builds a denylist from arbitrary words.
    ///
    /// Entries go through the same normalization as message words, so
    /// `Don't` is stored as `dont`.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| normalize_for_masking(w.as_ref()))
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Loads a word list file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| FilterError::Denylist {
            path: path.to_path_buf(),
            source,
        })?;

        let list = Self::from_words(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        );
        if list.is_empty() {
            return Err(FilterError::EmptyDenylist(path.to_path_buf()));
        }

        info!("Loaded denylist {}: {} words", path.display(), list.len());
        Ok(list)
    }

    /// Adds every word of `other` to this list.
    pub fn extend(&mut self, other: Denylist) {
        self.words.extend(other.words);
    }

    /// Exact, case-sensitive membership test. Callers lowercase first.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of words in the list.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
