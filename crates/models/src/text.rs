use sea_orm::{entity::prelude::*, sea_query::ForeignKeyAction, Set};
use serde::{Deserialize, Serialize};

use crate::errors::{self, ModelError};
use crate::{page, section};

/// A block of copy. `page_id` null means shared across pages; `section_id`
/// null means page body rather than a named slot.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "text")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
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
pub struct NewText<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub page_id: Option<i32>,
    pub section_id: Option<i32>,
}

pub async fn create<C: ConnectionTrait>(db: &C, new: NewText<'_>) -> Result<Model, ModelError> {
    errors::require("text title", new.title)?;
    let am = ActiveModel {
        title: Set(new.title.to_string()),
        content: Set(new.content.to_string()),
        page_id: Set(new.page_id),
        section_id: Set(new.section_id),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn update_body<C: ConnectionTrait>(db: &C, text: Model, title: &str, content: &str) -> Result<Model, ModelError> {
    errors::require("text title", title)?;
    let mut am: ActiveModel = text.into();
    am.title = Set(title.to_string());
    am.content = Set(content.to_string());
    Ok(am.update(db).await?)
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<u64, ModelError> {
    Ok(Entity::delete_by_id(id).exec(db).await?.rows_affected)
}
