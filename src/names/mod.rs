//! Star name database: the dual-keyed index and its query surface.
//!
//! Four submodules cover the full surface:
//!
//! - [`database`] — [`NameDatabase`]: `add`/`erase` and the direct index
//!   accessors (exact lookup, proper name, per-object name iteration)
//! - [`resolver`] — free-form designation resolution ([`find_catalog_number`])
//! - [`completion`] — case-insensitive substring autocomplete ([`completion`])
//! - [`loader`] — the `<number> <name>[:<name>...]` text loader
//!   ([`load_names`])

pub mod completion;
pub mod database;
pub mod loader;
pub mod resolver;

pub use completion::completion;
pub use database::{CatalogNumber, NameDatabase, INVALID_CATALOG_NUMBER};
pub use loader::{load_names, NameError};
pub use resolver::{designation_candidates, find_catalog_number};
