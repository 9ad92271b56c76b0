//! CSV import for the catalog.
//!
//! Reads the format written by [`crate::export`]: the first line is assumed
//! to be the header and discarded without validation. Rows that do not have
//! exactly 5 fields are skipped; a row with an unparseable year or status
//! aborts the whole import. Rows are staged and only applied once the file
//! has parsed, so an abort leaves the catalog untouched.

use std::path::Path;

use crate::domain::CatalogError;
use crate::models::{Book, BookStatus};
use crate::services::Catalog;

/// Merge the records from `path` into the catalog via upsert semantics and
/// return how many rows were applied.
///
/// A row repeating an ISBN earlier in the file (or already in the catalog)
/// replaces that record instead of duplicating it, so the applied count can
/// exceed the catalog growth.
pub fn import_catalog(catalog: &mut Catalog, path: &Path) -> Result<usize, CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut staged = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or_default();

        if record.len() != 5 {
            tracing::warn!(
                "Skipping row at line {}: expected 5 fields, got {}",
                line,
                record.len()
            );
            continue;
        }

        let year: i32 = record[3].parse().map_err(|_| CatalogError::Parse {
            line,
            message: format!("invalid year '{}'", &record[3]),
        })?;
        let status: BookStatus = record[4]
            .parse()
            .map_err(|message| CatalogError::Parse { line, message })?;

        staged.push(Book {
            title: record[0].to_string(),
            author: record[1].to_string(),
            isbn: record[2].to_string(),
            year,
            status,
        });
    }

    let count = staged.len();
    for book in staged {
        catalog.upsert(book);
    }

    tracing::info!("Imported {} books from {}", count, path.display());
    Ok(count)
}
