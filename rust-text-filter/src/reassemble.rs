//! Joining transformed words back into one line.

use crate::tokenize::SEPARATOR;

/// Joins words with single spaces into one buffer. No trailing separator.
pub fn reassemble<I, S>(words: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (i, word) in words.into_iter().enumerate() {
        if i > 0 {
            out.push(SEPARATOR);
        }
        out.push_str(word.as_ref());
    }
    out
}
