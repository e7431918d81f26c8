//! Runtime options for the two filters.

use crate::error::{FilterError, Result};
use std::path::PathBuf;

/// Default palindrome marker.
pub const DEFAULT_MARKER: &str = "**";

/// Chat filter configuration.
#[derive(Debug, Clone, Default)]
pub struct ChatConfig {
    /// Word list to load instead of the built-in denylist.
    /// Default: None.
    pub denylist_path: Option<PathBuf>,

    /// Merge the loaded list into the built-in one rather than replacing it.
    /// Default: false.
    pub extend_default: bool,
}

/// Palindrome highlighter configuration.
#[derive(Debug, Clone)]
pub struct PalindromeConfig {
    /// Text placed before and after each palindrome.
    /// Default: `**`.
    pub marker: String,

    /// Ignore punctuation when comparing (`noon.` counts).
    /// Default: true.
    pub strip_punctuation: bool,

    /// Also report whole-sentence palindromes.
    /// Default: false.
    pub sentences: bool,
}

impl Default for PalindromeConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            strip_punctuation: true,
            sentences: false,
        }
    }
}

impl PalindromeConfig {
    /// Rejects markers that would break word splitting of the output.
    pub fn validate(&self) -> Result<()> {
        if self.marker.is_empty() || self.marker.chars().any(char::is_whitespace) {
            return Err(FilterError::InvalidMarker(self.marker.clone()));
        }
        Ok(())
    }
}
