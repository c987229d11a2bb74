//! In-process store implementation using concurrent hash maps.
//!
//! [`MemoryStore`] implements every store trait over one shared set of
//! tables so that foreign keys and cascades behave like the PostgreSQL
//! schema. Contents live only as long as the process.

mod store;

pub use store::MemoryStore;
