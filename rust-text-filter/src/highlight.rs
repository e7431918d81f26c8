//! Palindrome highlighter: marks palindromic words and counts them.

use crate::config::PalindromeConfig;
use crate::error::Result;
use crate::normalize::normalize_for_palindrome;
use crate::palindrome::{find_sentence_palindromes, is_palindrome_word};
use crate::reassemble::reassemble;
use crate::tokenize::tokenize;
use crate::transform::wrap;
use log::debug;
use rayon::prelude::*;

/// Label of the count line.
pub const COUNT_LABEL: &str = "Palindrome Count Frequency : ";

/// Label of the optional sentence count line.
pub const SENTENCE_LABEL: &str = "Sentence palindromes : ";

/// Result of highlighting one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlighted {
    /// The input line as read.
    pub original: String,
    /// The line with palindromes wrapped in the marker.
    pub text: String,
    /// Number of palindromic words.
    pub count: usize,
    /// Whole-sentence palindromes, when requested.
    pub sentences: Option<Vec<String>>,
}

impl Highlighted {
    /// Formats the output block printed by the `palindrome` binary.
    pub fn render(&self) -> String {
        let mut out = format!("{}\n{}\n{}{}", self.original, self.text, COUNT_LABEL, self.count);
        if let Some(sentences) = &self.sentences {
            out.push('\n');
            out.push_str(SENTENCE_LABEL);
            out.push_str(&sentences.len().to_string());
        }
        out
    }
}

/// Wraps palindromic words in a marker.
#[derive(Debug, Clone, Default)]
pub struct PalindromeHighlighter {
    config: PalindromeConfig,
}

impl PalindromeHighlighter {
    /// Creates a highlighter after validating the marker.
    pub fn new(config: PalindromeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Highlights one line.
    pub fn highlight(&self, line: &str) -> Highlighted {
        let normalized = normalize_for_palindrome(line);
        let mut count = 0;

        let words = tokenize(&normalized).into_iter().map(|word| {
            if is_palindrome_word(word, self.config.strip_punctuation) {
                count += 1;
                wrap(word, &self.config.marker)
            } else {
                word.to_string()
            }
        });
        let text = reassemble(words);

        let sentences = self.config.sentences.then(|| {
            find_sentence_palindromes(&normalized)
                .into_iter()
                .map(str::to_string)
                .collect::<Vec<_>>()
        });

        debug!("Highlighted line: {} palindromes", count);
        Highlighted {
            original: line.to_string(),
            text,
            count,
            sentences,
        }
    }

    /// Highlights many lines in parallel, keeping input order.
    pub fn highlight_all<S: AsRef<str> + Sync>(&self, lines: &[S]) -> Vec<Highlighted> {
        lines.par_iter().map(|line| self.highlight(line.as_ref())).collect()
    }
}
