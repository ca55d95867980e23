pub mod symptom_check;

pub use symptom_check::Entity as SymptomCheck;
