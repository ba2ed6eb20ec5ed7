// crates/citydb-core/src/text.rs

/// Normalize a string for case-insensitive comparison.
///
/// Uses full Unicode lowercasing, so `"MÜNCHEN"` folds to `"münchen"`.
/// Diacritics are kept: `"munchen"` does not match `"München"`.
#[inline]
pub fn fold_key(s: &str) -> String {
    s.to_lowercase()
}

/// Case-insensitive substring test on folded forms.
///
/// An empty `needle` matches everything.
#[inline]
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    fold_key(haystack).contains(&fold_key(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_unicode_case() {
        assert_eq!(fold_key("MÜNCHEN"), "münchen");
        assert!(contains_folded("São Paulo", "SÃO"));
        assert!(!contains_folded("München", "munchen"));
    }

    #[test]
    fn empty_needle_matches() {
        assert!(contains_folded("Berlin", ""));
    }
}
