//! End-to-end scenarios over a names file on disk: load, then exercise
//! designation resolution, completion, and erase semantics together.

use std::fs::File;
use std::io::{BufReader, Write};
use std::sync::Arc;

use tempfile::NamedTempFile;

use celestial_names::{
    completion, find_catalog_number, load_names, ConstellationTable, GreekTable, NameDatabase,
    INVALID_CATALOG_NUMBER,
};

const NAMES_FILE: &str = "\
71683 Rigil Kentaurus:ALF Cen A:Alpha Centauri A
71681 ALF2 Cen:Alpha Centauri B
70890 Proxima Centauri:Proxima
104214 61 Cyg A
104217 61 Cyg B
11767 Polaris:ALF UMi
27989 Betelgeuse:ALF Ori
";

fn load_fixture() -> NameDatabase {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(NAMES_FILE.as_bytes()).unwrap();
    file.flush().unwrap();

    let mut db = NameDatabase::new(
        Arc::new(GreekTable::new()),
        Arc::new(ConstellationTable::new()),
    );
    let reader = BufReader::new(File::open(file.path()).unwrap());
    load_names(&mut db, reader).expect("Failed to load names file");
    db
}

#[test]
fn test_load_canonicalizes_and_counts() {
    let db = load_fixture();
    assert_eq!(db.name_count(), 13);
    // "ALF Cen A" was canonicalized at load time.
    assert_eq!(db.catalog_number_by_name("Alpha Cen A"), 71683);
    assert_eq!(
        db.catalog_number_by_name("ALF Cen A"),
        INVALID_CATALOG_NUMBER
    );
}

#[test]
fn test_proper_name_is_first_listed() {
    let db = load_fixture();
    assert_eq!(db.name_by_catalog_number(71683), Some("Rigil Kentaurus"));
    assert_eq!(db.name_by_catalog_number(11767), Some("Polaris"));
}

#[test]
fn test_resolve_exact_proper_name() {
    let db = load_fixture();
    assert_eq!(find_catalog_number(&db, "Betelgeuse"), 27989);
}

#[test]
fn test_resolve_bayer_with_component_fallback() {
    let db = load_fixture();
    // "Alpha Cen" is not registered; "Alpha Cen A" is.
    assert_eq!(find_catalog_number(&db, "Alpha Cen"), 71683);
    assert_eq!(find_catalog_number(&db, "ALF Centauri"), 71683);
}

#[test]
fn test_resolve_bayer_with_multiplicity_digit() {
    let db = load_fixture();
    // Loaded as "Alpha2 Cen" after canonicalization.
    assert_eq!(find_catalog_number(&db, "Alpha2 Cen"), 71681);
    assert_eq!(find_catalog_number(&db, "ALF2 Centauri"), 71681);
}

#[test]
fn test_resolve_flamsteed_with_component_fallback() {
    let db = load_fixture();
    assert_eq!(find_catalog_number(&db, "61 Cygni"), 104214);
    assert_eq!(find_catalog_number(&db, "61 Cyg"), 104214);
    assert_eq!(find_catalog_number(&db, "61 Cyg B"), 104217);
}

#[test]
fn test_resolve_misses_return_sentinel() {
    let db = load_fixture();
    assert_eq!(
        find_catalog_number(&db, "Nonexistent Xyz"),
        INVALID_CATALOG_NUMBER
    );
    assert_eq!(find_catalog_number(&db, "Sol"), INVALID_CATALOG_NUMBER);
}

#[test]
fn test_completion_over_loaded_names() {
    let db = load_fixture();
    assert_eq!(
        completion(&db, "Centauri", false),
        [
            "Alpha Centauri A",
            "Alpha Centauri B",
            "Proxima Centauri"
        ]
    );
    // Greek widening reaches the spelled-out forms from an abbreviation.
    let alf = completion(&db, "ALF", true);
    assert!(alf.contains(&"Alpha Cen A".to_string()));
    assert!(alf.contains(&"Alpha UMi".to_string()));
    assert!(alf.contains(&"Alpha Ori".to_string()));
}

#[test]
fn test_erase_drops_names_but_orphans_lookup() {
    let mut db = load_fixture();
    let before = db.name_count();

    db.erase(70890);

    assert_eq!(db.names_for(70890).count(), 0);
    assert_eq!(db.name_by_catalog_number(70890), None);
    assert_eq!(db.name_count(), before - 2);
    // The forward mapping is intentionally left in place.
    assert_eq!(db.catalog_number_by_name("Proxima"), 70890);
}

#[test]
fn test_partial_load_keeps_earlier_records() {
    let mut db = NameDatabase::new(
        Arc::new(GreekTable::new()),
        Arc::new(ConstellationTable::new()),
    );
    let text = "32349 Sirius\nnot-a-number Mystery\n";
    let err = load_names(&mut db, text.as_bytes()).expect_err("load should fail");
    assert!(err.to_string().contains("line 2"), "unexpected error: {}", err);
    assert_eq!(db.catalog_number_by_name("Sirius"), 32349);
    assert_eq!(db.name_count(), 1);
}
