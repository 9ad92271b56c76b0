//! Services Layer
//!
//! Pure business logic with no presentation or I/O dependencies.
//! The UI layer calls into these services and renders whatever comes back.

pub mod catalog_service;

// Re-export for convenience
pub use catalog_service::*;
