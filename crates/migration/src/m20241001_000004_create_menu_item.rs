//! Create `menu_item` table with FKs to `menu` and `page`.
//!
//! Both parents own their items: deleting either removes the row.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenuItem::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(MenuItem::Id).integer().not_null().auto_increment().primary_key())
                    .col(string_len(MenuItem::Label, 255))
                    .col(ColumnDef::new(MenuItem::Url).string_len(255).null())
                    .col(integer(MenuItem::MenuId))
                    .col(ColumnDef::new(MenuItem::PageId).integer().null())
                    .col(timestamp_with_time_zone(MenuItem::CreatedAt))
                    .col(timestamp_with_time_zone(MenuItem::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menu_item_menu")
                            .from(MenuItem::Table, MenuItem::MenuId)
                            .to(Menu::Table, Menu::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menu_item_page")
                            .from(MenuItem::Table, MenuItem::PageId)
                            .to(Page::Table, Page::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(MenuItem::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum MenuItem { Table, Id, Label, Url, MenuId, PageId, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Menu { Table, Id }

#[derive(DeriveIden)]
enum Page { Table, Id }
