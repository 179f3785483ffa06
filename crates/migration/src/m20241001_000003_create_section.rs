use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Section::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Section::Id).integer().not_null().auto_increment().primary_key())
                    .col(string_len(Section::Name, 128))
                    .col(timestamp_with_time_zone(Section::CreatedAt))
                    .col(timestamp_with_time_zone(Section::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Section::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Section { Table, Id, Name, CreatedAt, UpdatedAt }
