//! Admin-only movie catalog management.

pub mod service;

pub use service::{CatalogService, MovieInput};
