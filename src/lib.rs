//! Bidirectional star catalog name index.
//!
//! Maps opaque catalog numbers to human-readable names and back, resolves
//! free-form Bayer/Flamsteed designations ("Alpha2 Cen", "61 Cyg") to catalog
//! numbers even when the exact string was never registered, and provides
//! substring autocomplete over the registered names. The whole index lives in
//! memory and is rebuilt from a names text file each run: load once, query
//! many times.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`names::database`] | [`NameDatabase`]: dual name/number index, `add`/`erase`, direct lookups |
//! | [`names::resolver`] | Designation resolution with Greek-letter and " A"-suffix fallbacks |
//! | [`names::completion`] | Case-insensitive substring completion, Greek synonym widening |
//! | [`names::loader`] | `<number> <name>[:<name>...]` line-oriented loader |
//! | [`greek`] | Greek letter table (spelled/abbreviated/Unicode forms) |
//! | [`constellation`] | The 88 IAU constellations (nominative, genitive, abbreviation) |
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use celestial_names::{
//!     ConstellationTable, GreekTable, NameDatabase,
//!     find_catalog_number, load_names,
//! };
//!
//! let mut db = NameDatabase::new(
//!     Arc::new(GreekTable::new()),
//!     Arc::new(ConstellationTable::new()),
//! );
//! load_names(&mut db, "71683 Rigil Kentaurus:ALF Cen A\n".as_bytes())?;
//!
//! assert_eq!(db.name_by_catalog_number(71683), Some("Rigil Kentaurus"));
//! assert_eq!(find_catalog_number(&db, "Alpha Centauri"), 71683);
//! # Ok::<(), celestial_names::NameError>(())
//! ```
//!
//! # Features
//!
//! - **`cli`** — Enables the `names-query` binary for loading and querying
//!   names files from the command line.

pub mod constellation;
pub mod greek;
pub mod names;

pub use constellation::{Constellation, ConstellationTable};
pub use greek::GreekTable;
pub use names::{
    completion, designation_candidates, find_catalog_number, load_names, CatalogNumber,
    NameDatabase, NameError, INVALID_CATALOG_NUMBER,
};
