use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Format used for the `log_date` field of history entries.
pub const LOG_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One scored symptom check. Rows are only ever inserted.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "symptom_checks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Submitted symptoms, comma-joined when they arrived as a list.
    #[sea_orm(column_type = "Text")]
    pub symptoms: String,

    /// Scoring policy that produced this row (`count_threshold` or `weighted_keyword`).
    pub policy: String,
    pub risk_level: String,
    #[sea_orm(column_type = "Text")]
    pub diagnosis: String,

    /// Percentage in `[0, 95]`, NULL for count-threshold rows.
    #[sea_orm(column_type = "Double", nullable)]
    pub risk_score: Option<f64>,

    /// JSON array of matched keywords.
    #[sea_orm(column_type = "Text")]
    pub found_symptoms: String,

    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Matched keywords decoded from the stored JSON array.
    ///
    /// A row whose column does not hold a JSON string array yields an empty list.
    pub fn found_symptom_list(&self) -> Vec<String> {
        serde_json::from_str(&self.found_symptoms).unwrap_or_else(|e| {
            tracing::warn!(id = self.id, error = %e, "stored found_symptoms is not a JSON string array");
            Vec::new()
        })
    }

    /// `created_at` rendered as `YYYY-MM-DD HH:MM:SS` in UTC.
    pub fn log_date(&self) -> String {
        self.created_at.format(LOG_DATE_FORMAT).to_string()
    }
}
