use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum SymptomChecks {
    Table,
    Id,
    Symptoms,
    Policy,
    RiskLevel,
    Diagnosis,
    RiskScore,
    FoundSymptoms,
    CreatedAt,
}

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202510150001_create_symptom_checks"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SymptomChecks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SymptomChecks::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SymptomChecks::Symptoms).text().not_null())
                    .col(ColumnDef::new(SymptomChecks::Policy).string().not_null())
                    .col(ColumnDef::new(SymptomChecks::RiskLevel).string().not_null())
                    .col(ColumnDef::new(SymptomChecks::Diagnosis).text().not_null())
                    .col(ColumnDef::new(SymptomChecks::RiskScore).double().null())
                    .col(
                        ColumnDef::new(SymptomChecks::FoundSymptoms)
                            .text()
                            .not_null()
                            .default("[]"),
                    )
                    .col(
                        ColumnDef::new(SymptomChecks::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_symptom_checks_created_at")
                    .table(SymptomChecks::Table)
                    .col(SymptomChecks::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SymptomChecks::Table).to_owned())
            .await
    }
}
