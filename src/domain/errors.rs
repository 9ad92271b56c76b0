//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.
//! Validation errors are returned as values so the caller can keep its form
//! state and ask the user to correct the offending field.

use std::fmt;

#[derive(Debug)]
pub enum CatalogError {
    /// A required form field was left empty
    MissingField(&'static str),
    /// ISBN is not exactly 13 decimal digits
    InvalidIsbn,
    /// Year is not an integer in [1800, 2025]
    InvalidYear,
    /// CSV file could not be read or written
    Io(String),
    /// A CSV row after the header could not be parsed
    Parse { line: usize, message: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::MissingField(field) => write!(f, "Field '{}' is required", field),
            CatalogError::InvalidIsbn => write!(f, "ISBN must be exactly 13 digits"),
            CatalogError::InvalidYear => write!(f, "Year must be between 1800 and 2025"),
            CatalogError::Io(msg) => write!(f, "File error: {}", msg),
            CatalogError::Parse { line, message } => {
                write!(f, "Malformed CSV row at line {}: {}", line, message)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<std::io::Error> for CatalogError {
    fn from(e: std::io::Error) -> Self {
        CatalogError::Io(e.to_string())
    }
}

// The csv crate wraps I/O failures; unwrap them so the caller sees a single
// file-access error kind for both directions.
impl From<csv::Error> for CatalogError {
    fn from(e: csv::Error) -> Self {
        match e.kind() {
            csv::ErrorKind::Io(_) => CatalogError::Io(e.to_string()),
            _ => CatalogError::Parse {
                line: e
                    .position()
                    .map(|p| p.line() as usize)
                    .unwrap_or_default(),
                message: e.to_string(),
            },
        }
    }
}
