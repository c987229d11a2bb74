//! # boxoffice-core
//!
//! Core crate for BoxOffice. Contains the configuration schema and loader,
//! typed identifiers, timestamp helpers, and the unified error system.
//!
//! This crate has **no** internal dependencies on other BoxOffice crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
