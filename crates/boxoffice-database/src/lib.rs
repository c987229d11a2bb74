//! # boxoffice-database
//!
//! The persistence collaborator for BoxOffice. Services only see the
//! [`UserStore`], [`MovieStore`] and [`BookingStore`] traits; this crate
//! provides a PostgreSQL implementation of each and an in-process
//! [`MemoryStore`] implementing all three, plus the connection pool,
//! migrations, and a [`Stores`] bundle chosen from configuration.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod provider;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
pub use provider::Stores;
pub use store::{BookingStore, MovieStore, UserStore};
