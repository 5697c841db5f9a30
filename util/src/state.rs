//! Application state container shared across Axum route handlers.
//!
//! The database handle is created once in `main`, wrapped here, and handed to
//! every handler through Axum's `State<T>` extractor. There is no other
//! process-wide connection.

use sea_orm::DatabaseConnection;

/// Central application state shared across the server.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
}

impl AppState {
    /// Creates a new `AppState` around an already connected (and migrated) database.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns a shared reference to the internal `DatabaseConnection`.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Returns a cloned copy of the database connection.
    ///
    /// The connection is a pooled handle, so cloning is cheap. Useful when a
    /// future needs to own it.
    pub fn db_clone(&self) -> DatabaseConnection {
        self.db.clone()
    }
}
