//! Create `page` table, the canonical content target. `url` is unique.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Page::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Page::Id).integer().not_null().auto_increment().primary_key())
                    .col(string_len(Page::Name, 255))
                    .col(string_len(Page::Url, 255).unique_key())
                    .col(timestamp_with_time_zone(Page::CreatedAt))
                    .col(timestamp_with_time_zone(Page::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Page::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Page { Table, Id, Name, Url, CreatedAt, UpdatedAt }
