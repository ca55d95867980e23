use crate::error::{StoreError, StoreResult};
use crate::models::symptom_check::{ActiveModel, Column, Entity, Model};
use crate::repositories::history_store::{HistoryStore, NewSymptomCheck};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryOrder, QuerySelect, TransactionTrait,
};

/// `HistoryStore` backed by a pooled SeaORM connection.
#[derive(Clone)]
pub struct SymptomCheckRepository {
    db: DatabaseConnection,
}

impl SymptomCheckRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Connection-level failures mean the store is unreachable; anything else is a failed read.
fn read_error(err: DbErr) -> StoreError {
    match err {
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => StoreError::Unavailable(err),
        other => StoreError::Read(other),
    }
}

#[async_trait::async_trait]
impl HistoryStore for SymptomCheckRepository {
    async fn append(&self, check: NewSymptomCheck) -> StoreResult<Model> {
        let found_symptoms = serde_json::to_string(&check.found_symptoms)?;

        // The transaction holds the pooled connection; dropping it on an error
        // path rolls back and hands the connection back.
        let txn = self.db.begin().await.map_err(StoreError::Unavailable)?;

        let row = ActiveModel {
            id: NotSet,
            symptoms: Set(check.symptoms),
            policy: Set(check.policy),
            risk_level: Set(check.risk_level),
            diagnosis: Set(check.diagnosis),
            risk_score: Set(check.risk_score),
            found_symptoms: Set(found_symptoms),
            created_at: Set(Utc::now()),
        }
        .insert(&txn)
        .await
        .map_err(StoreError::Write)?;

        txn.commit().await.map_err(StoreError::Write)?;

        tracing::debug!(id = row.id, policy = %row.policy, "symptom check stored");
        Ok(row)
    }

    async fn list_recent(&self, limit: Option<u64>) -> StoreResult<Vec<Model>> {
        let mut query = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id);

        if let Some(limit) = limit {
            query = query.limit(limit);
        }

        query.all(&self.db).await.map_err(read_error)
    }

    async fn count(&self) -> StoreResult<u64> {
        Entity::find().count(&self.db).await.map_err(read_error)
    }
}
