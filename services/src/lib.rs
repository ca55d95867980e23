pub mod error;
pub mod symptom_check_service;

pub use error::{ServiceError, ServiceResult};
pub use symptom_check_service::{Analysis, SymptomCheckService};
