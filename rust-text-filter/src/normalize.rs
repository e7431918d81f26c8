//! Text normalization applied before tokenization.
//!
//! The masking variant strips everything but ASCII letters and whitespace,
//! collapses whitespace and lowercases. The palindrome variant only collapses
//! whitespace so the original spelling can be echoed back; case and
//! punctuation are folded away per token at comparison time instead.

use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
    static ref NON_LETTER: Regex = Regex::new(r"[^a-zA-Z\s]").unwrap();
}

/// Collapses runs of whitespace to a single space and trims both ends.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

/// Removes every character that is not an ASCII letter or whitespace.
///
/// Digits, punctuation, apostrophes inside contractions and non-ASCII
/// letters all disappear: `don't` becomes `dont`.
pub fn strip_non_letters(text: &str) -> String {
    NON_LETTER.replace_all(text, "").into_owned()
}

/// Normalizes a line for denylist matching.
///
/// Letters are stripped before whitespace is collapsed, so a removed run
/// such as `a 123 b` never leaves an empty word behind.
pub fn normalize_for_masking(text: &str) -> String {
    collapse_whitespace(&strip_non_letters(text)).to_lowercase()
}

/// Normalizes a line for palindrome highlighting. Case is preserved.
pub fn normalize_for_palindrome(text: &str) -> String {
    collapse_whitespace(text)
}

/// Folds a token into the characters compared by the palindrome check.
///
/// The token is NFC-composed first so that `é` written as `e` plus a
/// combining accent counts as one character. With `strip_punctuation`
/// only alphanumeric characters survive.
pub fn fold_for_comparison(token: &str, strip_punctuation: bool) -> Vec<char> {
    token
        .nfc()
        .filter(|c| !strip_punctuation || c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  hello \t\n  world  "), "hello world");
        assert_eq!(collapse_whitespace("   "), "");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn test_strip_non_letters() {
        assert_eq!(strip_non_letters("don't 42 stop!"), "dont  stop");
        assert_eq!(strip_non_letters("café"), "caf");
    }

    #[test]
    fn test_normalize_for_masking() {
        assert_eq!(
            normalize_for_masking("  You are   STUPID, and a disappointment!! "),
            "you are stupid and a disappointment"
        );
    }

    #[test]
    fn test_masking_never_leaves_empty_words() {
        assert_eq!(normalize_for_masking("a 123 b"), "a b");
        assert_eq!(normalize_for_masking("123 a ..."), "a");
        assert_eq!(normalize_for_masking("1 2 3"), "");
    }

    #[test]
    fn test_normalize_for_palindrome_keeps_case_and_punctuation() {
        assert_eq!(normalize_for_palindrome("  Noon.   Level "), "Noon. Level");
    }

    #[test]
    fn test_fold_for_comparison() {
        assert_eq!(fold_for_comparison("Noon.", true), vec!['n', 'o', 'o', 'n']);
        assert_eq!(fold_for_comparison("Noon.", false), vec!['n', 'o', 'o', 'n', '.']);
    }

    #[test]
    fn test_fold_composes_accents() {
        let decomposed = "e\u{301}te\u{301}";
        assert_eq!(fold_for_comparison(decomposed, true), vec!['é', 't', 'é']);
    }
}
