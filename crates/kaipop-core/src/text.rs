// crates/kaipop-core/src/text.rs

/// Fold a string into the form used for name comparison.
///
/// This is a plain Unicode lowercase. No transliteration is applied, so
/// `"Kāne'ohe"` folds to `"kāne'ohe"`, not `"kane'ohe"`.
///
/// # Examples
///
/// ```rust
/// use kaipop_core::fold_key;
///
/// assert_eq!(fold_key("KAILUA"), "kailua");
/// assert_eq!(fold_key("MoKaiWaena"), "mokaiwaena");
/// ```
#[inline]
pub fn fold_key(s: &str) -> String {
    s.to_lowercase()
}

/// Returns `true` if the folded `haystack` contains `folded_needle`.
///
/// The needle must already be folded; callers that test many names against
/// one needle fold it once up front.
#[inline]
pub fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    fold_key(haystack).contains(folded_needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_ascii_case() {
        assert_eq!(fold_key("Kailua Test"), "kailua test");
        assert_eq!(fold_key("HILO"), "hilo");
    }

    #[test]
    fn does_not_transliterate() {
        assert_eq!(fold_key("Kāʻanapali"), "kāʻanapali");
        assert!(!contains_folded("Kāi", "kai"));
    }

    #[test]
    fn contains_anywhere_in_the_name() {
        assert!(contains_folded("Mokaiwaena", "kai"));
        assert!(contains_folded("KAILUA", "kai"));
        assert!(!contains_folded("Honolulu", "kai"));
    }
}
