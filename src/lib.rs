pub mod config;
pub mod domain;
pub mod export;
pub mod import;
pub mod models;
pub mod services;

// Re-exports for convenience
pub use config::Config;
pub use domain::CatalogError;
pub use export::export_catalog;
pub use import::import_catalog;
pub use models::{Book, BookStatus};
pub use services::{Catalog, validate};
