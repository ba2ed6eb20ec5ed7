// crates/citydb-core/src/traits.rs
use crate::text::contains_folded;

/// Name-based matching helpers for types that expose a canonical display name.
///
/// Implementors provide a `&str` view of their canonical name via
/// [`NameMatch::name_str`] and get [`NameMatch::name_contains`], a
/// case-insensitive substring match built on
/// [`fold_key`](crate::text::fold_key).
///
/// # Examples
/// ```rust
/// use citydb_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Berlin").name_contains("ERL"));
/// assert!(Place("Zürich").name_contains("zür"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Case-insensitive substring match.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        contains_folded(self.name_str(), q)
    }
}
