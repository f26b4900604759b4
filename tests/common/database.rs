//! Test database utilities
//!
//! Each test gets an isolated, migrated in-memory SQLite database.

use lingua_gateway::config::DatabaseConfig;
use lingua_gateway::storage::Database;
use std::sync::Arc;

/// Test database wrapper providing isolated in-memory SQLite instances
#[derive(Debug, Clone)]
pub struct TestDatabase {
    inner: Arc<Database>,
}

impl TestDatabase {
    /// Create a new migrated in-memory database
    pub async fn new() -> Self {
        let db = Database::new(&test_db_config())
            .await
            .expect("Failed to create in-memory test database");

        db.migrate()
            .await
            .expect("Failed to run database migrations");

        Self {
            inner: Arc::new(db),
        }
    }

    /// Get reference to the underlying database
    pub fn db(&self) -> &Database {
        &self.inner
    }

    /// Take the database out of the wrapper
    ///
    /// Panics when other clones are still alive.
    pub fn into_inner(self) -> Database {
        Arc::try_unwrap(self.inner).expect("TestDatabase still shared")
    }
}

/// Config for a single-connection in-memory database
pub fn test_db_config() -> DatabaseConfig {
    DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        // In-memory SQLite is private to its connection
        max_connections: 1,
        connection_timeout: 5,
        ..Default::default()
    }
}
