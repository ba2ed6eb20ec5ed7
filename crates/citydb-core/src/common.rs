use serde::Serialize;

/// Simple aggregate statistics for the catalog.
///
/// Returned by [`Catalog::stats`](crate::Catalog::stats); `cities` counts
/// distinct composite keys, so duplicate entries in the source are counted once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub countries: usize,
    pub cities: usize,
}
