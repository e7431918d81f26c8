//! Palindrome detection for words and whole sentences.

use crate::normalize::fold_for_comparison;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SENTENCE_END: Regex = Regex::new(r"[.!?]+").unwrap();
}

/// Two-pointer check from both ends; case-insensitive.
///
/// Empty and single-character slices are palindromes.
pub fn is_palindrome(letters: &[char]) -> bool {
    if letters.len() < 2 {
        return true;
    }
    let (mut i, mut j) = (0, letters.len() - 1);
    while i < j {
        if !chars_eq_ignore_case(letters[i], letters[j]) {
            return false;
        }
        i += 1;
        j -= 1;
    }
    true
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Checks a single word.
///
/// With `strip_punctuation`, `noon.` and `Dad!` qualify. A word made only
/// of punctuation (`-`) folds to nothing and is trivially a palindrome.
pub fn is_palindrome_word(word: &str, strip_punctuation: bool) -> bool {
    is_palindrome(&fold_for_comparison(word, strip_punctuation))
}

/// Returns the sentences of `text` that are palindromes as a whole.
///
/// Sentences end at `.`, `!` or `?`. Only sentences of two or more words
/// count, since one-word sentences are already covered by the word check.
/// Spaces, punctuation and case are ignored.
pub fn find_sentence_palindromes(text: &str) -> Vec<&str> {
    SENTENCE_END
        .split(text)
        .map(str::trim)
        .filter(|sentence| sentence.split_whitespace().nth(1).is_some())
        .filter(|sentence| {
            let letters = fold_for_comparison(sentence, true);
            !letters.is_empty() && is_palindrome(&letters)
        })
        .collect()
}
