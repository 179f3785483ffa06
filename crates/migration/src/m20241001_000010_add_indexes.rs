use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// (index name, table, column) for every foreign key and label lookup column.
const INDEXES: &[(&str, Tbl, Col)] = &[
    ("idx_menu_item_menu", Tbl::MenuItem, Col::MenuId),
    ("idx_menu_item_page", Tbl::MenuItem, Col::PageId),
    ("idx_menu_item_label", Tbl::MenuItem, Col::Label),
    ("idx_link_menu", Tbl::Link, Col::MenuId),
    ("idx_link_page", Tbl::Link, Col::PageId),
    ("idx_link_label", Tbl::Link, Col::Label),
    ("idx_text_page", Tbl::Text, Col::PageId),
    ("idx_text_section", Tbl::Text, Col::SectionId),
    ("idx_image_page", Tbl::Image, Col::PageId),
    ("idx_image_section", Tbl::Image, Col::SectionId),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table, col) in INDEXES {
            manager
                .create_index(
                    Index::create()
                        .name(*name)
                        .table(*table)
                        .col(*col)
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table, _) in INDEXES.iter().rev() {
            manager
                .drop_index(Index::drop().name(*name).table(*table).to_owned())
                .await?;
        }
        Ok(())
    }
}

#[derive(DeriveIden, Clone, Copy)]
enum Tbl { MenuItem, Link, Text, Image }

#[derive(DeriveIden, Clone, Copy)]
enum Col { MenuId, PageId, SectionId, Label }
