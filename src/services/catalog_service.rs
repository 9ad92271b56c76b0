//! Catalog Service - the in-memory book store
//!
//! Owns the ordered collection of book records and every mutation on it.
//! The presentation layer holds no business state: it forwards raw field
//! strings to [`validate`], applies the result through [`Catalog`], and
//! re-renders from [`Catalog::books`] or [`Catalog::search`].

use crate::domain::CatalogError;
use crate::models::{Book, BookStatus};

const YEAR_MIN: i32 = 1800;
const YEAR_MAX: i32 = 2025;

/// Validate raw form input and build a [`Book`] from it.
///
/// Field strings are taken as-is (no trimming). Errors identify the specific
/// violated constraint so the UI can show a targeted message while keeping
/// the form state for correction.
pub fn validate(
    title: &str,
    author: &str,
    isbn: &str,
    year_text: &str,
    status: BookStatus,
) -> Result<Book, CatalogError> {
    if title.is_empty() {
        return Err(CatalogError::MissingField("title"));
    }
    if author.is_empty() {
        return Err(CatalogError::MissingField("author"));
    }
    if isbn.is_empty() {
        return Err(CatalogError::MissingField("isbn"));
    }
    if year_text.is_empty() {
        return Err(CatalogError::MissingField("year"));
    }

    if isbn.len() != 13 || !isbn.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CatalogError::InvalidIsbn);
    }

    let year: i32 = year_text.parse().map_err(|_| CatalogError::InvalidYear)?;
    if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
        return Err(CatalogError::InvalidYear);
    }

    Ok(Book {
        title: title.to_string(),
        author: author.to_string(),
        isbn: isbn.to_string(),
        year,
        status,
    })
}

/// Ordered collection of books, insertion order preserved for display.
///
/// Holds at most one record per ISBN. All operations are synchronous and
/// total over validated input; none of them can leave the catalog in a
/// partially updated state.
#[derive(Debug, Default)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only snapshot in insertion order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Insert-or-update keyed by ISBN.
    ///
    /// An existing record keeps its position in the catalog; a new ISBN is
    /// appended at the end. Input is assumed pre-validated by [`validate`].
    pub fn upsert(&mut self, book: Book) {
        match self.books.iter_mut().find(|b| b.isbn == book.isbn) {
            Some(existing) => {
                tracing::debug!("Updating existing record for ISBN {}", book.isbn);
                *existing = book;
            }
            None => self.books.push(book),
        }
    }

    /// Remove the record with the given ISBN, reporting whether one existed.
    /// Ordering of the remaining records is unchanged.
    pub fn delete(&mut self, isbn: &str) -> bool {
        let before = self.books.len();
        self.books.retain(|b| b.isbn != isbn);
        let removed = self.books.len() < before;
        tracing::debug!("Delete ISBN {}: removed={}", isbn, removed);
        removed
    }

    /// Keyword search over title, author, ISBN and year.
    ///
    /// Title and author match case-insensitively; ISBN and the decimal year
    /// text match as exact substrings. An empty keyword matches every record.
    /// Returns fresh clones in catalog order.
    pub fn search(&self, keyword: &str) -> Vec<Book> {
        let needle = keyword.to_lowercase();
        self.books
            .iter()
            .filter(|b| {
                b.title.to_lowercase().contains(&needle)
                    || b.author.to_lowercase().contains(&needle)
                    || b.isbn.contains(keyword)
                    || b.year.to_string().contains(keyword)
            })
            .cloned()
            .collect()
    }
}
