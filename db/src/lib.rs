pub mod models;
pub mod repositories;
pub mod schema;
pub mod test_utils;

use sea_orm::{Database, DatabaseConnection, DbErr};
use std::path::Path;
use util::config;

/// Opens the connection pool described by `DATABASE_PATH`.
///
/// A plain file path is treated as SQLite; its parent directory is created
/// first because SQLite will not create intermediate directories.
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    let path_or_url = config::database_path();
    let url = config::resolve_database_url(&path_or_url);

    if url != path_or_url {
        if let Some(parent) = Path::new(&path_or_url).parent() {
            let _ = std::fs::create_dir_all(parent);
        }
    }

    tracing::info!(url = %url, "Connecting to database");
    Database::connect(&url).await
}
