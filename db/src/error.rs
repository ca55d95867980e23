use sea_orm::DbErr;

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by history storage.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No connection could be acquired from the pool.
    #[error("storage unavailable: {0}")]
    Unavailable(#[source] DbErr),

    /// A connection was acquired but the insert or commit failed.
    #[error("failed to write symptom check: {0}")]
    Write(#[source] DbErr),

    #[error("failed to read symptom history: {0}")]
    Read(#[source] DbErr),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
