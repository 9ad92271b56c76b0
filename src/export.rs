//! CSV export for the catalog.
//!
//! On-disk format: a `Title,Author,ISBN,Year,Status` header, then one row per
//! record in catalog order, `\n`-terminated. Fields are quoted only when they
//! contain a delimiter or quote, so comma-free catalogs serialize as plain
//! unescaped lines.

use std::path::Path;

use serde::Serialize;

use crate::domain::CatalogError;
use crate::models::BookStatus;
use crate::services::Catalog;

/// One CSV row. Field order defines the column order.
#[derive(Debug, Serialize)]
pub(crate) struct CsvBook<'a> {
    #[serde(rename = "Title")]
    pub title: &'a str,
    #[serde(rename = "Author")]
    pub author: &'a str,
    #[serde(rename = "ISBN")]
    pub isbn: &'a str,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Status")]
    pub status: BookStatus,
}

pub(crate) const CSV_HEADER: [&str; 5] = ["Title", "Author", "ISBN", "Year", "Status"];

/// Write the whole catalog to `path`, replacing any existing file.
///
/// The header is written even for an empty catalog. The catalog itself is
/// never touched; a failed export leaves it exactly as it was.
pub fn export_catalog(catalog: &Catalog, path: &Path) -> Result<(), CatalogError> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;

    writer.write_record(CSV_HEADER)?;
    for book in catalog.books() {
        writer.serialize(CsvBook {
            title: &book.title,
            author: &book.author,
            isbn: &book.isbn,
            year: book.year,
            status: book.status,
        })?;
    }
    writer.flush()?;

    tracing::info!("Exported {} books to {}", catalog.len(), path.display());
    Ok(())
}
