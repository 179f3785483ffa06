//! Migrator registering the content tables in dependency order.
//! Parents (menu, page, section) come first so child foreign keys resolve;
//! indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20241001_000001_create_menu;
mod m20241001_000002_create_page;
mod m20241001_000003_create_section;
mod m20241001_000004_create_menu_item;
mod m20241001_000005_create_link;
mod m20241001_000006_create_text;
mod m20241001_000007_create_image;
mod m20241001_000010_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241001_000001_create_menu::Migration),
            Box::new(m20241001_000002_create_page::Migration),
            Box::new(m20241001_000003_create_section::Migration),
            Box::new(m20241001_000004_create_menu_item::Migration),
            Box::new(m20241001_000005_create_link::Migration),
            Box::new(m20241001_000006_create_text::Migration),
            Box::new(m20241001_000007_create_image::Migration),
            // Indexes should always be applied last
            Box::new(m20241001_000010_add_indexes::Migration),
        ]
    }
}
