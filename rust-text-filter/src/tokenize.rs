//! Splitting normalized text into words.

/// Word separator used by both normalizers.
pub const SEPARATOR: char = ' ';

/// Splits normalized text into its words, in order.
///
/// Empty text yields no words at all rather than one empty word.
pub fn tokenize(normalized: &str) -> Vec<&str> {
    if normalized.is_empty() {
        return Vec::new();
    }
    split_raw(normalized)
}

/// Splits on the separator without filtering, so `""` gives `[""]`.
pub fn split_raw(text: &str) -> Vec<&str> {
    text.split(SEPARATOR).collect()
}
