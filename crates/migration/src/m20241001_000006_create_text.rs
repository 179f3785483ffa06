//! Create `text` table.
//!
//! Page owns its texts (cascade); a section only tags them (set null).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Text::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Text::Id).integer().not_null().auto_increment().primary_key())
                    .col(string_len(Text::Title, 255))
                    .col(text(Text::Content))
                    .col(ColumnDef::new(Text::SectionId).integer().null())
                    .col(ColumnDef::new(Text::PageId).integer().null())
                    .col(timestamp_with_time_zone(Text::CreatedAt))
                    .col(timestamp_with_time_zone(Text::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_text_section")
                            .from(Text::Table, Text::SectionId)
                            .to(Section::Table, Section::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_text_page")
                            .from(Text::Table, Text::PageId)
                            .to(Page::Table, Page::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Text::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Text { Table, Id, Title, Content, SectionId, PageId, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Section { Table, Id }

#[derive(DeriveIden)]
enum Page { Table, Id }
