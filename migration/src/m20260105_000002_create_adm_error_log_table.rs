use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AdmErrorLog::Table)
                    .if_not_exists()
                    .col(string(AdmErrorLog::ErrorId).primary_key())
                    .col(text(AdmErrorLog::ErrorMessage))
                    .col(text_null(AdmErrorLog::ErrorBody))
                    .col(string_null(AdmErrorLog::HostIp))
                    .col(string_null(AdmErrorLog::ClientIp))
                    .col(string_null(AdmErrorLog::LoginId))
                    .col(string_len(AdmErrorLog::NotifiedYn, 1))
                    .col(timestamp_with_time_zone(AdmErrorLog::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AdmErrorLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AdmErrorLog {
    Table,
    ErrorId,
    ErrorMessage,
    ErrorBody,
    HostIp,
    ClientIp,
    LoginId,
    NotifiedYn,
    CreatedAt,
}
