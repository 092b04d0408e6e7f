use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SerialNo::Table)
                    .if_not_exists()
                    .col(string(SerialNo::SerialName).primary_key())
                    .col(big_integer(SerialNo::CurrentValue))
                    .col(timestamp_with_time_zone(SerialNo::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SerialNo::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SerialNo {
    Table,
    SerialName,
    CurrentValue,
    UpdatedAt,
}
