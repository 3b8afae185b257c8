use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CounterRecord::Table)
                    .if_not_exists()
                    .col(string(CounterRecord::Name).primary_key())
                    .col(string(CounterRecord::Value))
                    .col(timestamp(CounterRecord::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CounterRecord::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CounterRecord {
    Table,
    Name,
    Value,
    UpdatedAt,
}
