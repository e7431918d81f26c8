//! Per-word rewrites.

/// Replacement for every masked letter.
pub const MASK_CHAR: char = '*';

/// Replaces each alphabetic character with `*`, keeping everything else in place.
pub fn mask_word(word: &str) -> String {
    word.chars()
        .map(|c| if c.is_alphabetic() { MASK_CHAR } else { c })
        .collect()
}

/// Uppercases the first character and leaves the rest untouched.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Surrounds a word with `marker` on both sides.
pub fn wrap(word: &str, marker: &str) -> String {
    let mut out = String::with_capacity(word.len() + 2 * marker.len());
    out.push_str(marker);
    out.push_str(word);
    out.push_str(marker);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_word() {
        assert_eq!(mask_word("stupid"), "******");
        assert_eq!(mask_word("b4d!"), "*4*!");
        assert_eq!(mask_word(""), "");
    }

    #[test]
    fn test_mask_is_idempotent() {
        for word in ["disgrace", "c-r-e-e-p", "x1y2", ""] {
            let once = mask_word(word);
            assert_eq!(mask_word(&once), once);
            assert_eq!(once.chars().count(), word.chars().count());
        }
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("you"), "You");
        assert_eq!(capitalize("a"), "A");
        assert_eq!(capitalize("mIxED"), "MIxED");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_capitalize_only_touches_first_char() {
        for word in ["hello", "world", "zebra", "qUEUE"] {
            let out = capitalize(word);
            assert_eq!(out.len(), word.len());
            assert_eq!(&out[1..], &word[1..]);
            assert_eq!(out[..1].to_lowercase(), word[..1].to_lowercase());
        }
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("noon", "**"), "**noon**");
        assert_eq!(wrap("dad", "$$"), "$$dad$$");
    }
}
