use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Link::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Link::Id).integer().not_null().auto_increment().primary_key())
                    .col(string_len(Link::Label, 255))
                    .col(string_len(Link::Url, 255))
                    .col(integer(Link::MenuId))
                    .col(ColumnDef::new(Link::PageId).integer().null())
                    .col(timestamp_with_time_zone(Link::CreatedAt))
                    .col(timestamp_with_time_zone(Link::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_link_menu")
                            .from(Link::Table, Link::MenuId)
                            .to(Menu::Table, Menu::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_link_page")
                            .from(Link::Table, Link::PageId)
                            .to(Page::Table, Page::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Link::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Link { Table, Id, Label, Url, MenuId, PageId, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Menu { Table, Id }

#[derive(DeriveIden)]
enum Page { Table, Id }
