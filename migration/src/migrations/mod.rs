pub mod m202510150001_create_symptom_checks;
