//! Application state container shared across Axum route handlers and services.
//!
//! Holds the pooled database connection plus the scoring settings resolved at
//! startup. Handlers receive it through Axum's `State<T>` extractor.

use crate::config;
use scorer::PolicyKind;
use sea_orm::DatabaseConnection;

/// Central application state shared across the server.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    policy: PolicyKind,
    history_limit: Option<u64>,
}

impl AppState {
    /// Creates a new `AppState` with explicit scoring settings.
    pub fn new(db: DatabaseConnection, policy: PolicyKind, history_limit: Option<u64>) -> Self {
        Self {
            db,
            policy,
            history_limit,
        }
    }

    /// Creates a new `AppState`, taking scoring settings from the global config.
    pub fn from_config(db: DatabaseConnection) -> Self {
        Self::new(db, config::scoring_policy(), config::history_limit())
    }

    /// Returns a shared reference to the internal `DatabaseConnection`.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Returns a cloned copy of the database connection.
    ///
    /// Useful for async contexts or spawning tasks that require ownership.
    pub fn db_clone(&self) -> DatabaseConnection {
        self.db.clone()
    }

    pub fn policy(&self) -> PolicyKind {
        self.policy
    }

    pub fn history_limit(&self) -> Option<u64> {
        self.history_limit
    }
}
