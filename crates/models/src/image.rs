use sea_orm::{entity::prelude::*, sea_query::ForeignKeyAction, Set};
use serde::{Deserialize, Serialize};

use crate::errors::{self, ModelError};
use crate::{page, section};

/// Media asset, scoped by page and/or section like `text`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "image")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub url: String,
    pub section_id: Option<i32>,
    pub page_id: Option<i32>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Section, Page }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Section => Entity::belongs_to(section::Entity)
                .from(Column::SectionId)
                .to(section::Column::Id)
                .on_delete(ForeignKeyAction::SetNull)
                .into(),
            Relation::Page => Entity::belongs_to(page::Entity)
                .from(Column::PageId)
                .to(page::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<section::Entity> for Entity {
    fn to() -> RelationDef { Relation::Section.def() }
}

impl Related<page::Entity> for Entity {
    fn to() -> RelationDef { Relation::Page.def() }
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

#[derive(Clone, Debug, Default)]
pub struct NewImage<'a> {
    pub name: &'a str,
    pub url: &'a str,
    pub page_id: Option<i32>,
    pub section_id: Option<i32>,
}

pub async fn create<C: ConnectionTrait>(db: &C, new: NewImage<'_>) -> Result<Model, ModelError> {
    errors::require("image name", new.name)?;
    errors::require("image url", new.url)?;
    let am = ActiveModel {
        name: Set(new.name.to_string()),
        url: Set(new.url.to_string()),
        page_id: Set(new.page_id),
        section_id: Set(new.section_id),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ModelError::from(e).keyed("image name", new.name))
}

pub async fn find_by_name<C: ConnectionTrait>(db: &C, name: &str) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find().filter(Column::Name.eq(name)).one(db).await?)
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<u64, ModelError> {
    Ok(Entity::delete_by_id(id).exec(db).await?.rows_affected)
}
