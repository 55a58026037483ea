//! Dual-keyed name index: canonical name → catalog number, and
//! catalog number → names in insertion order.
//!
//! The two indexes describe the same logical entries but answer different
//! questions. The name index gives exact lookup of a canonicalized display
//! name; the number index, ordered by catalog number with per-number
//! insertion order preserved, gives the list of names registered for an
//! object. Both are mutated only through [`NameDatabase::add`] and
//! [`NameDatabase::erase`], which keeps them consistent.

use std::collections::BTreeMap;
use std::sync::Arc;

use log::{debug, warn};

use crate::constellation::ConstellationTable;
use crate::greek::GreekTable;

/// Catalog number of an object. `u32` throughout the system.
pub type CatalogNumber = u32;

/// Sentinel meaning "no such object". Never a valid key in either index.
pub const INVALID_CATALOG_NUMBER: CatalogNumber = u32::MAX;

/// In-memory star name database.
///
/// Built once by [`load`](crate::names::load_names) (or repeated
/// [`add`](Self::add) calls), then queried. Read-only after loading; share
/// freely by `&` reference across threads if the embedding system needs to,
/// but never interleave `add`/`erase` with concurrent reads.
pub struct NameDatabase {
    greek: Arc<GreekTable>,
    constellations: Arc<ConstellationTable>,
    pub(crate) name_index: BTreeMap<String, CatalogNumber>,
    pub(crate) number_index: BTreeMap<CatalogNumber, Vec<String>>,
}

impl NameDatabase {
    /// Create an empty database using the given collaborator tables.
    pub fn new(greek: Arc<GreekTable>, constellations: Arc<ConstellationTable>) -> Self {
        NameDatabase {
            greek,
            constellations,
            name_index: BTreeMap::new(),
            number_index: BTreeMap::new(),
        }
    }

    /// The Greek letter table this database canonicalizes with.
    pub fn greek(&self) -> &GreekTable {
        &self.greek
    }

    /// The constellation table used for designation resolution.
    pub fn constellations(&self) -> &ConstellationTable {
        &self.constellations
    }

    /// Register `raw_name` for `number`.
    ///
    /// The name is trimmed and canonicalized (Greek abbreviation expanded)
    /// before indexing. Names empty after trimming, and the
    /// [`INVALID_CATALOG_NUMBER`] sentinel, are skipped. A name already
    /// registered for a different number is overwritten in the name index
    /// (last write wins) and logged; this is tolerated, not an error.
    pub fn add(&mut self, number: CatalogNumber, raw_name: &str) {
        let trimmed = raw_name.trim();
        if trimmed.is_empty() {
            return;
        }
        if number == INVALID_CATALOG_NUMBER {
            warn!("Ignoring name '{}' for the invalid catalog number", trimmed);
            return;
        }

        let name = self.greek.replace_greek_abbreviation(trimmed);

        if let Some(&previous) = self.name_index.get(&name) {
            debug!(
                "Duplicated name '{}' on objects with catalog numbers {} and {}",
                name, previous, number
            );
        }

        self.name_index.insert(name.clone(), number);
        self.number_index.entry(number).or_default().push(name);
    }

    /// Remove every number-index entry for `number`.
    ///
    /// Name-index entries still pointing at `number` are left in place, so an
    /// erased object remains reachable by exact name lookup. Erasing an
    /// unknown number is a no-op.
    pub fn erase(&mut self, number: CatalogNumber) {
        self.number_index.remove(&number);
    }

    /// Exact lookup of a canonicalized name. Returns
    /// [`INVALID_CATALOG_NUMBER`] on a miss.
    pub fn catalog_number_by_name(&self, name: &str) -> CatalogNumber {
        self.name_index
            .get(name)
            .copied()
            .unwrap_or(INVALID_CATALOG_NUMBER)
    }

    /// Number of (number, name) associations in the number index.
    ///
    /// May exceed the name-index size when duplicate names overwrote earlier
    /// entries there.
    pub fn name_count(&self) -> usize {
        self.number_index.values().map(Vec::len).sum()
    }

    /// The first-inserted name for `number` — its proper name, provided the
    /// catalog listed the proper name before alternate designations. `None`
    /// for the sentinel or an unknown number.
    pub fn name_by_catalog_number(&self, number: CatalogNumber) -> Option<&str> {
        if number == INVALID_CATALOG_NUMBER {
            return None;
        }
        self.number_index
            .get(&number)
            .and_then(|names| names.first())
            .map(String::as_str)
    }

    /// All names registered for `number`, in insertion order.
    pub fn names_for(&self, number: CatalogNumber) -> impl Iterator<Item = &str> {
        self.number_index
            .get(&number)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_db() -> NameDatabase {
        NameDatabase::new(
            Arc::new(GreekTable::new()),
            Arc::new(ConstellationTable::new()),
        )
    }

    #[test]
    fn test_add_and_lookup_round_trip() {
        let mut db = empty_db();
        db.add(71683, "Alpha Centauri");
        assert_eq!(db.catalog_number_by_name("Alpha Centauri"), 71683);
    }

    #[test]
    fn test_add_canonicalizes_greek_abbreviation() {
        let mut db = empty_db();
        db.add(71683, "ALF Cen A");
        assert_eq!(db.catalog_number_by_name("Alpha Cen A"), 71683);
        assert_eq!(
            db.catalog_number_by_name("ALF Cen A"),
            INVALID_CATALOG_NUMBER
        );
    }

    #[test]
    fn test_add_skips_empty_names() {
        let mut db = empty_db();
        db.add(1, "");
        db.add(1, "   ");
        assert_eq!(db.name_count(), 0);
    }

    #[test]
    fn test_add_rejects_sentinel_number() {
        let mut db = empty_db();
        db.add(INVALID_CATALOG_NUMBER, "Phantom");
        assert_eq!(db.name_count(), 0);
        assert_eq!(db.catalog_number_by_name("Phantom"), INVALID_CATALOG_NUMBER);
    }

    #[test]
    fn test_first_name_is_first_inserted() {
        let mut db = empty_db();
        db.add(11767, "Polaris");
        db.add(11767, "Alpha UMi");
        assert_eq!(db.name_by_catalog_number(11767), Some("Polaris"));
    }

    #[test]
    fn test_names_for_preserves_insertion_order() {
        let mut db = empty_db();
        db.add(11767, "Polaris");
        db.add(11767, "Alpha UMi");
        db.add(11767, "1 UMi");
        let names: Vec<_> = db.names_for(11767).collect();
        assert_eq!(names, ["Polaris", "Alpha UMi", "1 UMi"]);
    }

    #[test]
    fn test_names_for_is_restartable() {
        let mut db = empty_db();
        db.add(5, "Achernar");
        assert_eq!(db.names_for(5).count(), 1);
        assert_eq!(db.names_for(5).count(), 1);
    }

    #[test]
    fn test_names_for_unknown_number_is_empty() {
        let db = empty_db();
        assert_eq!(db.names_for(42).count(), 0);
        assert_eq!(db.names_for(INVALID_CATALOG_NUMBER).count(), 0);
    }

    #[test]
    fn test_duplicate_name_last_write_wins() {
        let mut db = empty_db();
        db.add(100, "X");
        db.add(200, "X");
        assert_eq!(db.catalog_number_by_name("X"), 200);
        // Both associations survive in the number index.
        assert_eq!(db.names_for(100).collect::<Vec<_>>(), ["X"]);
        assert_eq!(db.names_for(200).collect::<Vec<_>>(), ["X"]);
        assert_eq!(db.name_count(), 2);
    }

    #[test]
    fn test_erase_removes_all_names_for_number() {
        let mut db = empty_db();
        db.add(7, "Mira");
        db.add(7, "Omicron Cet");
        db.add(8, "Vega");
        db.erase(7);
        assert_eq!(db.names_for(7).count(), 0);
        assert_eq!(db.name_by_catalog_number(7), None);
        assert_eq!(db.name_count(), 1);
    }

    #[test]
    fn test_erase_unknown_number_is_noop() {
        let mut db = empty_db();
        db.add(1, "Sirius");
        db.erase(999);
        assert_eq!(db.name_count(), 1);
    }

    #[test]
    fn test_erase_orphans_forward_mapping() {
        // Long-standing behavior: the forward mapping survives an erase and
        // keeps pointing at the erased number.
        let mut db = empty_db();
        db.add(7, "Mira");
        db.erase(7);
        assert_eq!(db.catalog_number_by_name("Mira"), 7);
    }

    #[test]
    fn test_sentinel_lookup_misses() {
        let db = empty_db();
        assert_eq!(
            db.catalog_number_by_name("Nowhere"),
            INVALID_CATALOG_NUMBER
        );
        assert_eq!(db.name_by_catalog_number(INVALID_CATALOG_NUMBER), None);
    }
}
