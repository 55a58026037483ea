//! Free-form designation resolution.
//!
//! Turns a query like "Alpha2 Cen", "61 Cyg", or "ALF Cen" into a catalog
//! number, even when the exact string was never registered. The interesting
//! queries are Bayer ("Greek letter [+ multiplicity digit] + constellation")
//! and Flamsteed ("number + constellation") designations, where the catalog
//! key may differ from the query in letter spelling, implicit multiplicity,
//! or a trailing binary-component " A".
//!
//! Candidate generation is a pure function over the collaborator tables;
//! probing the candidates against the name index is a separate step. The
//! fixed probe order trades precision for recall: an exact textual match
//! always wins before suffix variants are tried.

use crate::constellation::ConstellationTable;
use crate::greek::GreekTable;

use super::database::{CatalogNumber, NameDatabase, INVALID_CATALOG_NUMBER};

/// Resolve `query` to a catalog number, [`INVALID_CATALOG_NUMBER`] on a miss.
///
/// Tries an exact name-index lookup first — the common case — and only then
/// parses the query as a designation via [`designation_candidates`], probing
/// the candidates in order. Never fails and never mutates the database.
pub fn find_catalog_number(db: &NameDatabase, query: &str) -> CatalogNumber {
    let number = db.catalog_number_by_name(query);
    if number != INVALID_CATALOG_NUMBER {
        return number;
    }

    for candidate in designation_candidates(query, db.greek(), db.constellations()) {
        let number = db.catalog_number_by_name(&candidate);
        if number != INVALID_CATALOG_NUMBER {
            return number;
        }
    }

    INVALID_CATALOG_NUMBER
}

/// Expand a query into the ordered list of catalog keys it may be filed
/// under. Empty when the query cannot be read as a designation at all.
///
/// The query splits at its first space into a prefix and a constellation
/// part. From there:
///
/// - constellation resolved, prefix is a Greek letter with an explicit
///   multiplicity digit ("Alpha2 Cen"): the digit is peeled before letter
///   canonicalization and reattached — `["Alpha2 Cen", "Alpha2 Cen A"]`;
/// - constellation resolved, Greek letter without a digit ("Alpha Cen"): an
///   explicit-"1" secondary covers catalogs that always encode multiplicity —
///   `["Alpha Cen", "Alpha Cen A", "Alpha1 Cen", "Alpha1 Cen A"]`;
/// - constellation resolved, prefix not Greek ("61 Cyg"): the prefix is kept
///   verbatim — `["61 Cyg", "61 Cyg A"]`;
/// - constellation unresolved: the query itself is the only base candidate,
///   so only the " A" probe adds anything over the exact lookup.
pub fn designation_candidates(
    query: &str,
    greek: &GreekTable,
    constellations: &ConstellationTable,
) -> Vec<String> {
    let Some(pos) = query.find(' ') else {
        return Vec::new();
    };
    if pos == 0 || pos + 1 == query.len() {
        return Vec::new();
    }

    let prefix = &query[..pos];
    let constellation_part = &query[pos + 1..];

    let mut primary = query.to_string();
    let mut secondary = None;

    if let Some(constellation) = constellations.resolve(constellation_part) {
        let abbrev = constellation.abbreviation();

        // "Alpha2 Cen": peel a trailing multiplicity digit off the prefix
        // before trying to read it as a Greek letter.
        let mut digit = None;
        let mut letter_part = prefix;
        if prefix.len() > 2
            && prefix.starts_with(|c: char| c.is_alphabetic())
            && prefix.ends_with(|c: char| c.is_ascii_digit())
        {
            let split = prefix.len() - 1;
            digit = Some(&prefix[split..]);
            letter_part = &prefix[..split];
        }

        match greek.canonical(letter_part) {
            Some(letter) => match digit {
                Some(d) => primary = format!("{}{} {}", letter, d, abbrev),
                None => {
                    primary = format!("{} {}", letter, abbrev);
                    secondary = Some(format!("{}1 {}", letter, abbrev));
                }
            },
            // Flamsteed or other non-Greek prefix: keep the original,
            // unshortened prefix.
            None => primary = format!("{} {}", prefix, abbrev),
        }
    }

    let mut candidates = Vec::with_capacity(4);
    let with_component = format!("{} A", primary);
    candidates.push(primary);
    candidates.push(with_component);
    if let Some(secondary) = secondary {
        let with_component = format!("{} A", secondary);
        candidates.push(secondary);
        candidates.push(with_component);
    }
    candidates
}
