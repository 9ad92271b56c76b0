//! Domain layer - Pure business abstractions
//!
//! This layer contains NO framework dependencies.
//! Only the domain error taxonomy lives here.

pub mod errors;

pub use errors::CatalogError;
