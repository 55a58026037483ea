//! Line-oriented loader for star name files.
//!
//! One record per line:
//!
//! ```text
//! <catalog number> <name>[:<name>:...]
//! ```
//!
//! Exactly one separator character (a space or a colon) follows the number;
//! the remainder splits on `:` into alias fields. The first field should be
//! the proper name — the database defines "the name" of an object as the
//! first one loaded for it. Empty fields are permitted and skipped. There is
//! no escaping: a name containing `:` will be split.

use std::io::BufRead;

use thiserror::Error;

use super::database::NameDatabase;

/// Failure aborting a [`load_names`] call.
///
/// Names added before the failing record are retained; loading is not
/// transactional.
#[derive(Error, Debug)]
pub enum NameError {
    /// A record did not start with a parseable catalog number.
    #[error("Bad catalog number at line {line}: '{text}'")]
    BadCatalogNumber { line: usize, text: String },

    /// The underlying stream reported a read fault.
    #[error("Read error while loading names: {0}")]
    Io(#[from] std::io::Error),
}

/// Read star name records from `reader` into `db` until end of stream.
///
/// Blank lines are skipped. A malformed catalog number or a read fault stops
/// the load at that record and returns the error; everything already added
/// stays in the database.
pub fn load_names<R: BufRead>(db: &mut NameDatabase, reader: R) -> Result<(), NameError> {
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        parse_record(db, &line).ok_or_else(|| NameError::BadCatalogNumber {
            line: index + 1,
            text: line.trim().to_string(),
        })?;
    }
    Ok(())
}

/// Parse one record line and add its aliases. `None` if the leading catalog
/// number is malformed.
fn parse_record(db: &mut NameDatabase, line: &str) -> Option<()> {
    let record = line.trim_start();
    let digits = record
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(record.len());
    let number: u32 = record[..digits].parse().ok()?;

    // Skip the single separator character after the number; everything
    // after it splits on ':'.
    let rest = &record[digits..];
    let mut chars = rest.chars();
    chars.next();
    for alias in chars.as_str().split(':') {
        db.add(number, alias);
    }
    Some(())
}
