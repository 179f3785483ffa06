use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::errors::{self, ModelError};
use crate::{image, text};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "section")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Text, Image }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Text => Entity::has_many(text::Entity).into(),
            Relation::Image => Entity::has_many(image::Entity).into(),
        }
    }
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

pub async fn create<C: ConnectionTrait>(db: &C, name: &str) -> Result<Model, ModelError> {
    errors::require("section name", name)?;
    let am = ActiveModel { name: Set(name.to_string()), ..Default::default() };
    Ok(am.insert(db).await?)
}

/// Delete a section. Texts and images in the slot survive with `section_id` cleared.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<u64, ModelError> {
    Ok(Entity::delete_by_id(id).exec(db).await?.rows_affected)
}
