//! Create `image` table. Same ownership rules as `text`; `name` is unique.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Image::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Image::Id).integer().not_null().auto_increment().primary_key())
                    .col(string_len(Image::Name, 255).unique_key())
                    .col(string_len(Image::Url, 512))
                    .col(ColumnDef::new(Image::SectionId).integer().null())
                    .col(ColumnDef::new(Image::PageId).integer().null())
                    .col(timestamp_with_time_zone(Image::CreatedAt))
                    .col(timestamp_with_time_zone(Image::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_image_section")
                            .from(Image::Table, Image::SectionId)
                            .to(Section::Table, Section::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_image_page")
                            .from(Image::Table, Image::PageId)
                            .to(Page::Table, Page::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Image::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Image { Table, Id, Name, Url, SectionId, PageId, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Section { Table, Id }

#[derive(DeriveIden)]
enum Page { Table, Id }
