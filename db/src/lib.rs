pub mod error;
pub mod models;
pub mod repositories;
pub mod test_utils;

pub use error::{StoreError, StoreResult};
pub use repositories::{HistoryStore, NewSymptomCheck, SymptomCheckRepository};

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::path::Path;
use util::config;

/// Turns the configured database path into a connection URL.
///
/// Anything that already looks like a DSN is used as-is; otherwise the value is
/// treated as a SQLite file path, created on first connect.
pub fn database_url(path_or_url: &str) -> String {
    if path_or_url.starts_with("sqlite:")
        || path_or_url.starts_with("postgres://")
        || path_or_url.starts_with("mysql://")
    {
        path_or_url.to_string()
    } else {
        // SQLite won't create intermediate dirs.
        if let Some(parent) = Path::new(path_or_url).parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!(
                    dir = %parent.display(),
                    error = %e,
                    "could not create database directory"
                );
            }
        }
        format!("sqlite://{path_or_url}?mode=rwc")
    }
}

/// Opens the connection pool described by the global config.
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    let url = database_url(&config::database_path());
    let mut options = ConnectOptions::new(url);
    options.sqlx_logging(false);
    Database::connect(options).await
}
