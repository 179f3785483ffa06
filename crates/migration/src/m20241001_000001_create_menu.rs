//! Create `menu` table. Titles are unique.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Menu::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Menu::Id).integer().not_null().auto_increment().primary_key())
                    .col(string_len(Menu::Title, 128).unique_key())
                    .col(timestamp_with_time_zone(Menu::CreatedAt))
                    .col(timestamp_with_time_zone(Menu::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Menu::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Menu { Table, Id, Title, CreatedAt, UpdatedAt }
