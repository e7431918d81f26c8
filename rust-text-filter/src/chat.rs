//! Profanity filter: masks denylisted words and capitalizes the rest.

use crate::config::ChatConfig;
use crate::denylist::Denylist;
use crate::error::Result;
use crate::normalize::normalize_for_masking;
use crate::reassemble::reassemble;
use crate::tokenize::tokenize;
use crate::transform::{capitalize, mask_word};
use log::debug;
use rayon::prelude::*;

/// Prefix of every rendered line.
pub const OUTPUT_PREFIX: &str = "Final message: ";

/// Classification of one word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordClass {
    /// Found in the denylist.
    Masked,
    /// Not in the denylist.
    Plain,
}

/// Result of filtering one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredMessage {
    /// The rewritten line.
    pub text: String,
    /// How many words were masked.
    pub masked: usize,
}

impl FilteredMessage {
    /// Formats the line as printed by the `chat-filter` binary.
    pub fn render(&self) -> String {
        format!("{}{}", OUTPUT_PREFIX, self.text)
    }
}

/// Masks denylisted words in chat messages.
#[derive(Debug, Clone, Default)]
pub struct ChatFilter {
    denylist: Denylist,
}

impl ChatFilter {
    /// Creates a filter over the given denylist.
    pub fn new(denylist: Denylist) -> Self {
        Self { denylist }
    }

    /// Builds a filter from configuration, loading a word list if one is set.
    pub fn from_config(config: &ChatConfig) -> Result<Self> {
        let denylist = match &config.denylist_path {
            Some(path) => {
                let loaded = Denylist::load(path)?;
                if config.extend_default {
                    let mut merged = Denylist::default();
                    merged.extend(loaded);
                    merged
                } else {
                    loaded
                }
            }
            None => Denylist::default(),
        };
        Ok(Self::new(denylist))
    }

    /// The active denylist.
    pub fn denylist(&self) -> &Denylist {
        &self.denylist
    }

    /// Classifies a normalized word.
    pub fn classify(&self, word: &str) -> WordClass {
        if self.denylist.contains(word) {
            WordClass::Masked
        } else {
            WordClass::Plain
        }
    }

    /// Filters one raw line.
    pub fn filter(&self, line: &str) -> FilteredMessage {
        let normalized = normalize_for_masking(line);
        let mut masked = 0;

        let words = tokenize(&normalized).into_iter().map(|word| match self.classify(word) {
            WordClass::Masked => {
                masked += 1;
                mask_word(word)
            }
            WordClass::Plain => capitalize(word),
        });
        let text = reassemble(words);

        debug!("Filtered line: {} masked", masked);
        FilteredMessage { text, masked }
    }

    /// Filters many lines in parallel, keeping input order.
    pub fn filter_all<S: AsRef<str> + Sync>(&self, lines: &[S]) -> Vec<FilteredMessage> {
        lines.par_iter().map(|line| self.filter(line.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masks_and_capitalizes() {
        let filter = ChatFilter::default();
        let out = filter.filter("You are stupid and a disappointment");
        assert_eq!(out.text, "You Are ****** And A **************");
        assert_eq!(out.masked, 2);
    }

    #[test]
    fn test_render() {
        let filter = ChatFilter::default();
        assert_eq!(
            filter.filter("such a creep").render(),
            "Final message: Such A *****"
        );
    }

    #[test]
    fn test_case_and_punctuation_are_normalized() {
        let filter = ChatFilter::default();
        let out = filter.filter("  BAD,   bad!! b4d ");
        assert_eq!(out.text, "*** *** Bd");
        assert_eq!(out.masked, 2);
    }

    #[test]
    fn test_empty_line() {
        let filter = ChatFilter::default();
        let out = filter.filter("");
        assert_eq!(out.text, "");
        assert_eq!(out.masked, 0);
        assert_eq!(out.render(), "Final message: ");
    }

    #[test]
    fn test_only_symbols() {
        let filter = ChatFilter::default();
        assert_eq!(filter.filter("123 !!! ...").text, "");
    }

    #[test]
    fn test_classify() {
        let filter = ChatFilter::default();
        assert_eq!(filter.classify("failure"), WordClass::Masked);
        assert_eq!(filter.classify("success"), WordClass::Plain);
    }

    #[test]
    fn test_custom_denylist() {
        let filter = ChatFilter::new(Denylist::from_words(["rude"]));
        let out = filter.filter("rude but not stupid");
        assert_eq!(out.text, "**** But Not Stupid");
    }

    #[test]
    fn test_filter_all_keeps_order() {
        let filter = ChatFilter::default();
        let lines = ["bad day", "good day", "creep"];
        let out: Vec<String> = filter.filter_all(&lines).into_iter().map(|m| m.text).collect();
        assert_eq!(out, vec!["*** Day", "Good Day", "*****"]);
    }
}
