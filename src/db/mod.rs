//! Database module
//!
//! This module handles database connections, migrations, and the stores
//! that sit behind the service layer.

pub mod connection;
pub mod memory;
pub mod repositories;
pub mod store;

use std::sync::Arc;

use sqlx::PgPool;

pub use connection::*;
pub use memory::MemoryStore;
pub use store::{ContestStore, RegistrationStore, UserStore};

use repositories::{ContestRepository, RegistrationRepository, UserRepository};

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// The three stores the application reads and writes
#[derive(Clone)]
pub struct Stores {
    pub contests: Arc<dyn ContestStore>,
    pub registrations: Arc<dyn RegistrationStore>,
    pub users: Arc<dyn UserStore>,
}

impl Stores {
    /// Postgres-backed stores sharing one pool
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            contests: Arc::new(ContestRepository::new(pool.clone())),
            registrations: Arc::new(RegistrationRepository::new(pool.clone())),
            users: Arc::new(UserRepository::new(pool)),
        }
    }

    /// Stores backed by a single in-process [`MemoryStore`]
    pub fn in_memory(store: MemoryStore) -> Self {
        Self {
            contests: Arc::new(store.clone()),
            registrations: Arc::new(store.clone()),
            users: Arc::new(store),
        }
    }
}
