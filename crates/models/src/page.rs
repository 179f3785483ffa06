use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::errors::{self, ModelError};
use crate::{image, link, menu_item, text};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "page")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub url: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

/// A page owns every row that points at it; the cascades live on the child side.
#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { MenuItem, Link, Text, Image }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::MenuItem => Entity::has_many(menu_item::Entity).into(),
            Relation::Link => Entity::has_many(link::Entity).into(),
            Relation::Text => Entity::has_many(text::Entity).into(),
            Relation::Image => Entity::has_many(image::Entity).into(),
        }
    }
}

impl Related<menu_item::Entity> for Entity {
    fn to() -> RelationDef { Relation::MenuItem.def() }
}

impl Related<link::Entity> for Entity {
    fn to() -> RelationDef { Relation::Link.def() }
}

impl Related<text::Entity> for Entity {
    fn to() -> RelationDef { Relation::Text.def() }
}

impl Related<image::Entity> for Entity {
    fn to() -> RelationDef { Relation::Image.def() }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        crate::timestamps::touch(&mut self.created_at, &mut self.updated_at, insert);
        Ok(self)
    }
}

pub async fn create<C: ConnectionTrait>(db: &C, name: &str, url: &str) -> Result<Model, ModelError> {
    errors::require("page name", name)?;
    errors::require_path("page url", url)?;
    let am = ActiveModel {
        name: Set(name.to_string()),
        url: Set(url.to_string()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ModelError::from(e).keyed("page url", url))
}

pub async fn find_by_url<C: ConnectionTrait>(db: &C, url: &str) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find().filter(Column::Url.eq(url)).one(db).await?)
}

/// True when another page (not `except`) already uses `url`.
pub async fn url_taken<C: ConnectionTrait>(db: &C, url: &str, except: Option<i32>) -> Result<bool, ModelError> {
    let mut query = Entity::find().filter(Column::Url.eq(url));
    if let Some(id) = except {
        query = query.filter(Column::Id.ne(id));
    }
    Ok(query.one(db).await?.is_some())
}

/// Apply a new name and/or url. Fields left `None` are untouched.
pub async fn update<C: ConnectionTrait>(
    db: &C,
    page: Model,
    name: Option<&str>,
    url: Option<&str>,
) -> Result<Model, ModelError> {
    let mut am: ActiveModel = page.into();
    if let Some(n) = name {
        errors::require("page name", n)?;
        am.name = Set(n.to_string());
    }
    if let Some(u) = url {
        errors::require_path("page url", u)?;
        am.url = Set(u.to_string());
    }
    let key = url.unwrap_or_default().to_string();
    am.update(db).await.map_err(|e| ModelError::from(e).keyed("page url", &key))
}

/// Delete a page. The engine cascades to its menu items, links, texts and images.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<u64, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected)
}
