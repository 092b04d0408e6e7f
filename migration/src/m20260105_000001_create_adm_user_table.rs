use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AdmUser::Table)
                    .if_not_exists()
                    .col(string(AdmUser::UserCode).primary_key())
                    .col(string(AdmUser::UserName))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_adm_user_user_name")
                    .table(AdmUser::Table)
                    .col(AdmUser::UserName)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AdmUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AdmUser {
    Table,
    UserCode,
    UserName,
}
