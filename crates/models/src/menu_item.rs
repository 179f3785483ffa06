use sea_orm::{entity::prelude::*, sea_query::ForeignKeyAction, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::{self, ModelError};
use crate::{menu, page};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "menu_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub label: String,
    /// Copy of the page url, refreshed whenever the page url changes.
    pub url: Option<String>,
    pub menu_id: i32,
    pub page_id: Option<i32>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Menu, Page }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Menu => Entity::belongs_to(menu::Entity)
                .from(Column::MenuId)
                .to(menu::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
            Relation::Page => Entity::belongs_to(page::Entity)
                .from(Column::PageId)
                .to(page::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<menu::Entity> for Entity {
    fn to() -> RelationDef { Relation::Menu.def() }
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

pub async fn create<C: ConnectionTrait>(
    db: &C,
    menu_id: i32,
    label: &str,
    url: Option<&str>,
    page_id: Option<i32>,
) -> Result<Model, ModelError> {
    errors::require("menu item label", label)?;
    if let Some(u) = url {
        errors::require_path("menu item url", u)?;
    }
    let am = ActiveModel {
        label: Set(label.to_string()),
        url: Set(url.map(str::to_string)),
        menu_id: Set(menu_id),
        page_id: Set(page_id),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

/// Oldest menu item carrying `label`.
pub async fn find_by_label<C: ConnectionTrait>(db: &C, label: &str) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find()
        .filter(Column::Label.eq(label))
        .order_by_asc(Column::Id)
        .one(db)
        .await?)
}

pub async fn find_by_page<C: ConnectionTrait>(db: &C, page_id: i32) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find()
        .filter(Column::PageId.eq(page_id))
        .order_by_asc(Column::Id)
        .all(db)
        .await?)
}

/// Point an item at a new label/url, optionally moving it to another menu.
pub async fn retarget<C: ConnectionTrait>(
    db: &C,
    item: Model,
    label: Option<&str>,
    url: Option<&str>,
    menu_id: Option<i32>,
) -> Result<Model, ModelError> {
    let mut am: ActiveModel = item.into();
    if let Some(l) = label {
        errors::require("menu item label", l)?;
        am.label = Set(l.to_string());
    }
    if let Some(u) = url {
        errors::require_path("menu item url", u)?;
        am.url = Set(Some(u.to_string()));
    }
    if let Some(m) = menu_id {
        am.menu_id = Set(m);
    }
    Ok(am.update(db).await?)
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<u64, ModelError> {
    Ok(Entity::delete_by_id(id).exec(db).await?.rows_affected)
}
