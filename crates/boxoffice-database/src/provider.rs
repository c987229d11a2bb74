//! Store bundle selected from configuration.

use std::sync::Arc;

use tracing::info;

use boxoffice_core::config::{DatabaseConfig, DatabaseProvider};
use boxoffice_core::error::AppError;

use crate::connection::DatabasePool;
use crate::memory::MemoryStore;
use crate::migration::run_migrations;
use crate::repositories::{BookingRepository, MovieRepository, UserRepository};
use crate::store::{BookingStore, MovieStore, UserStore};

/// What the stores are backed by.
#[derive(Debug, Clone)]
pub enum Backend {
    /// A PostgreSQL pool shared by the repositories.
    Postgres(DatabasePool),
    /// Process-local tables.
    Memory,
}

/// The three stores the services depend on.
#[derive(Debug, Clone)]
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub movies: Arc<dyn MovieStore>,
    pub bookings: Arc<dyn BookingStore>,
    backend: Backend,
}

impl Stores {
    /// Build the stores for the configured provider.
    ///
    /// For PostgreSQL this connects the pool and, when `auto_migrate` is
    /// set, applies pending migrations before returning.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        match config.provider {
            DatabaseProvider::Postgres => {
                let db = DatabasePool::connect(config).await?;
                if config.auto_migrate {
                    run_migrations(db.pool()).await?;
                }
                Ok(Self::postgres(db))
            }
            DatabaseProvider::Memory => {
                info!("Using in-memory store; data will not survive a restart");
                Ok(Self::memory())
            }
        }
    }

    /// Repositories over an existing pool.
    pub fn postgres(db: DatabasePool) -> Self {
        let pool = db.pool().clone();
        Self {
            users: Arc::new(UserRepository::new(pool.clone())),
            movies: Arc::new(MovieRepository::new(pool.clone())),
            bookings: Arc::new(BookingRepository::new(pool)),
            backend: Backend::Postgres(db),
        }
    }

    /// A fresh, empty in-memory bundle.
    pub fn memory() -> Self {
        let store = MemoryStore::new();
        Self {
            users: Arc::new(store.clone()),
            movies: Arc::new(store.clone()),
            bookings: Arc::new(store),
            backend: Backend::Memory,
        }
    }

    pub fn backend(&self) -> &Backend {
        &self.backend
    }

    /// Returns `true` when the backing store is reachable.
    pub async fn ping(&self) -> Result<bool, AppError> {
        match &self.backend {
            Backend::Postgres(db) => db.health_check().await,
            Backend::Memory => Ok(true),
        }
    }

    /// Release backend resources.
    pub async fn close(&self) {
        if let Backend::Postgres(db) = &self.backend {
            db.close().await;
        }
    }
}
