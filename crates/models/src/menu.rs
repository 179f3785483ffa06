use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::errors::{self, ModelError};
use crate::{link, menu_item};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "menu")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub title: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { MenuItem, Link }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::MenuItem => Entity::has_many(menu_item::Entity).into(),
            Relation::Link => Entity::has_many(link::Entity).into(),
        }
    }
}

impl Related<menu_item::Entity> for Entity {
    fn to() -> RelationDef { Relation::MenuItem.def() }
}

impl Related<link::Entity> for Entity {
    fn to() -> RelationDef { Relation::Link.def() }
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

pub async fn create<C: ConnectionTrait>(db: &C, title: &str) -> Result<Model, ModelError> {
    errors::require("menu title", title)?;
    let am = ActiveModel { title: Set(title.to_string()), ..Default::default() };
    am.insert(db).await.map_err(|e| ModelError::from(e).keyed("menu title", title))
}

pub async fn find_by_title<C: ConnectionTrait>(db: &C, title: &str) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find().filter(Column::Title.eq(title)).one(db).await?)
}

/// Delete a menu together with its menu items and links (engine cascade).
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<u64, ModelError> {
    Ok(Entity::delete_by_id(id).exec(db).await?.rows_affected)
}
