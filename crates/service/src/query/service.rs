use models::{image, link, menu, menu_item, page, section, text};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::instrument;

use crate::errors::ServiceError;
use crate::query::scope::ContentScope;

/// Read side of the content layer. Lists come back in id order; single-row
/// lookups return `None` when nothing matches.
#[derive(Clone)]
pub struct QueryService {
    db: DatabaseConnection,
}

impl QueryService {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    // menus

    pub async fn menus(&self) -> Result<Vec<menu::Model>, ServiceError> {
        Ok(menu::Entity::find().order_by_asc(menu::Column::Id).all(&self.db).await?)
    }

    pub async fn menu_by_id(&self, id: i32) -> Result<Option<menu::Model>, ServiceError> {
        Ok(menu::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn menu_by_title(&self, title: &str) -> Result<Option<menu::Model>, ServiceError> {
        Ok(menu::find_by_title(&self.db, title).await?)
    }

    /// Items of one menu.
    pub async fn menu_items(&self, menu_id: i32) -> Result<Vec<menu_item::Model>, ServiceError> {
        Ok(menu_item::Entity::find()
            .filter(menu_item::Column::MenuId.eq(menu_id))
            .order_by_asc(menu_item::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn all_menu_items(&self) -> Result<Vec<menu_item::Model>, ServiceError> {
        Ok(menu_item::Entity::find().order_by_asc(menu_item::Column::Id).all(&self.db).await?)
    }

    pub async fn menu_item_by_id(&self, id: i32) -> Result<Option<menu_item::Model>, ServiceError> {
        Ok(menu_item::Entity::find_by_id(id).one(&self.db).await?)
    }

    // links

    pub async fn links(&self) -> Result<Vec<link::Model>, ServiceError> {
        Ok(link::Entity::find().order_by_asc(link::Column::Id).all(&self.db).await?)
    }

    pub async fn links_by_menu(&self, menu_id: i32) -> Result<Vec<link::Model>, ServiceError> {
        Ok(link::Entity::find()
            .filter(link::Column::MenuId.eq(menu_id))
            .order_by_asc(link::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn link_by_id(&self, id: i32) -> Result<Option<link::Model>, ServiceError> {
        Ok(link::Entity::find_by_id(id).one(&self.db).await?)
    }

    // pages

    pub async fn pages(&self) -> Result<Vec<page::Model>, ServiceError> {
        Ok(page::Entity::find().order_by_asc(page::Column::Id).all(&self.db).await?)
    }

    pub async fn page_by_id(&self, id: i32) -> Result<Option<page::Model>, ServiceError> {
        Ok(page::Entity::find_by_id(id).one(&self.db).await?)
    }

    /// Exact url match, e.g. `/gov-ai`.
    #[instrument(level = "debug", skip(self))]
    pub async fn page_by_url(&self, url: &str) -> Result<Option<page::Model>, ServiceError> {
        Ok(page::find_by_url(&self.db, url).await?)
    }

    // sections

    pub async fn sections(&self) -> Result<Vec<section::Model>, ServiceError> {
        Ok(section::Entity::find().order_by_asc(section::Column::Id).all(&self.db).await?)
    }

    pub async fn section_by_id(&self, id: i32) -> Result<Option<section::Model>, ServiceError> {
        Ok(section::Entity::find_by_id(id).one(&self.db).await?)
    }

    // texts

    pub async fn all_texts(&self) -> Result<Vec<text::Model>, ServiceError> {
        Ok(text::Entity::find().order_by_asc(text::Column::Id).all(&self.db).await?)
    }

    pub async fn text_by_id(&self, id: i32) -> Result<Option<text::Model>, ServiceError> {
        Ok(text::Entity::find_by_id(id).one(&self.db).await?)
    }

    /// Texts placed exactly at `scope`.
    #[instrument(level = "debug", skip(self))]
    pub async fn texts(&self, scope: ContentScope) -> Result<Vec<text::Model>, ServiceError> {
        Ok(text::Entity::find()
            .filter(scope.condition(text::Column::PageId, text::Column::SectionId))
            .order_by_asc(text::Column::Id)
            .all(&self.db)
            .await?)
    }

    /// Body copy of a page (no section).
    pub async fn text_by_page(&self, page_id: i32) -> Result<Vec<text::Model>, ServiceError> {
        self.texts(ContentScope::page_body(page_id)).await
    }

    /// First text of the page placed in the given slot.
    pub async fn text_by_page_and_section(&self, page_id: i32, section_id: i32) -> Result<Option<text::Model>, ServiceError> {
        let scope = ContentScope::page_section(page_id, section_id);
        Ok(text::Entity::find()
            .filter(scope.condition(text::Column::PageId, text::Column::SectionId))
            .order_by_asc(text::Column::Id)
            .one(&self.db)
            .await?)
    }

    /// Shared slot content, not tied to any page.
    pub async fn text_by_section(&self, section_id: i32) -> Result<Vec<text::Model>, ServiceError> {
        self.texts(ContentScope::shared(section_id)).await
    }

    // images

    pub async fn all_images(&self) -> Result<Vec<image::Model>, ServiceError> {
        Ok(image::Entity::find().order_by_asc(image::Column::Id).all(&self.db).await?)
    }

    pub async fn image_by_id(&self, id: i32) -> Result<Option<image::Model>, ServiceError> {
        Ok(image::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn image_by_name(&self, name: &str) -> Result<Option<image::Model>, ServiceError> {
        Ok(image::find_by_name(&self.db, name).await?)
    }

    /// Images placed exactly at `scope`.
    #[instrument(level = "debug", skip(self))]
    pub async fn images(&self, scope: ContentScope) -> Result<Vec<image::Model>, ServiceError> {
        Ok(image::Entity::find()
            .filter(scope.condition(image::Column::PageId, image::Column::SectionId))
            .order_by_asc(image::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn images_by_section(&self, section_id: i32) -> Result<Vec<image::Model>, ServiceError> {
        self.images(ContentScope::shared(section_id)).await
    }

    pub async fn images_by_page(&self, page_id: i32) -> Result<Vec<image::Model>, ServiceError> {
        self.images(ContentScope::page_body(page_id)).await
    }
}
