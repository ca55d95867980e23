use migration::Migrator;
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

/// In-memory SQLite database with all migrations applied.
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory db");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Migrated database whose pool has been closed.
///
/// Every acquire fails with `DbErr::ConnectionAcquire`, the same error a
/// pool that can no longer reach its database produces.
pub async fn closed_test_db() -> DatabaseConnection {
    let db = setup_test_db().await;
    db.clone()
        .close()
        .await
        .expect("Failed to close test db pool");
    db
}
