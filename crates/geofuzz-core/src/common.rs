use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a geocoder.
///
/// Returned by [`crate::PlaceSearch::stats`], these counts reflect the
/// in-memory catalog and the name index derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Records in the catalog.
    pub places: usize,
    /// Records reachable under at least one name variant.
    pub indexed_places: usize,
    /// Records dropped at build time because no name survived normalization.
    pub skipped: usize,
    /// Distinct normalized name variants (the fuzzy candidate pool).
    pub variants: usize,
}
