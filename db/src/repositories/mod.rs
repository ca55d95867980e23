pub mod history_store;
pub mod symptom_check_repository;

pub use history_store::{HistoryStore, NewSymptomCheck};
pub use symptom_check_repository::SymptomCheckRepository;
