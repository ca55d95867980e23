use db::StoreError;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failures surfaced to the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[source] StoreError),

    #[error("storage write failed: {0}")]
    StorageWrite(#[source] StoreError),

    #[error("storage read failed: {0}")]
    StorageRead(#[source] StoreError),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable(_) => ServiceError::StorageUnavailable(err),
            StoreError::Write(_) | StoreError::Json(_) => ServiceError::StorageWrite(err),
            StoreError::Read(_) => ServiceError::StorageRead(err),
        }
    }
}
