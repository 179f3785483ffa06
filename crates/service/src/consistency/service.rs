use models::{image, link, menu, menu_item, page, slug, text};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};
use tracing::{info, instrument, warn};

use super::domain::{Feature, PageChanges, RemovedFeature, Triad};
use crate::errors::{step, ServiceError};

/// Write side of the content layer. Keeps pages, links and menu items in
/// agreement: labels, urls and lifetimes move together.
#[derive(Clone)]
pub struct ConsistencyService {
    db: DatabaseConnection,
}

impl ConsistencyService {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    /// Create a page for `label` and link it from `menu_id` with both a link
    /// and a menu item. The page url is derived from the label.
    ///
    /// # Examples
    /// ```
    /// use service::consistency::ConsistencyService;
    /// let feature = tokio_test::block_on(async {
    ///     let db = models::db::connect_in_memory().await.unwrap();
    ///     let menu = models::menu::create(&db, "features").await.unwrap();
    ///     ConsistencyService::new(db).create_feature(menu.id, "Gov AI").await
    /// })
    /// .unwrap();
    /// assert_eq!(feature.page.url, "/gov-ai");
    /// assert_eq!(feature.link.url, feature.page.url);
    /// assert_eq!(feature.menu_item.url.as_deref(), Some("/gov-ai"));
    /// ```
    #[instrument(skip(self))]
    pub async fn create_feature(&self, menu_id: i32, label: &str) -> Result<Feature, ServiceError> {
        let label = required_label(label)?;
        let url = slug::page_url(label);

        let txn = self.db.begin().await?;
        let result = create_triad(&txn, menu_id, label, &url).await;
        let feature = finish(txn, "create_feature", result).await?;

        info!(page_id = feature.page.id, url = %feature.page.url, "feature_created");
        Ok(feature)
    }

    /// Relabel the feature currently called `old_label`. The page keeps its id;
    /// its url and every link and menu item of the page follow the new label.
    #[instrument(skip(self))]
    pub async fn rename_feature(&self, old_label: &str, new_label: &str) -> Result<Feature, ServiceError> {
        let new_label = required_label(new_label)?;

        let txn = self.db.begin().await?;
        let result = async {
            let triad = resolve_by_label(&txn, old_label.trim()).await?;
            rename_triad(&txn, triad, new_label, None).await
        }
        .await;
        let feature = finish(txn, "rename_feature", result).await?;

        info!(page_id = feature.page.id, url = %feature.page.url, "feature_renamed");
        Ok(feature)
    }

    /// Same as [`rename_feature`](Self::rename_feature) but addressed by link id.
    /// With `menu_id`, the link and menu items also move to that menu.
    #[instrument(skip(self))]
    pub async fn rename_feature_by_link(
        &self,
        link_id: i32,
        new_label: &str,
        menu_id: Option<i32>,
    ) -> Result<Feature, ServiceError> {
        let new_label = required_label(new_label)?;

        let txn = self.db.begin().await?;
        let result = async {
            let link = link::Entity::find_by_id(link_id)
                .one(&txn)
                .await?
                .ok_or_else(|| ServiceError::not_found("link"))?;
            let triad = resolve_by_page(&txn, link.page_id, &link.label).await?;
            rename_triad(&txn, triad, new_label, menu_id).await
        }
        .await;
        let feature = finish(txn, "rename_feature_by_link", result).await?;

        info!(page_id = feature.page.id, url = %feature.page.url, menu_id = feature.link.menu_id, "feature_renamed");
        Ok(feature)
    }

    /// Remove the feature called `label`. Texts and images of the page go
    /// with it through the page cascade.
    #[instrument(skip(self))]
    pub async fn delete_feature(&self, label: &str) -> Result<RemovedFeature, ServiceError> {
        let txn = self.db.begin().await?;
        let result = async {
            let triad = resolve_by_label(&txn, label.trim()).await?;
            delete_triad(&txn, triad).await
        }
        .await;
        let removed = finish(txn, "delete_feature", result).await?;

        info!(
            page_id = removed.page.id,
            url = %removed.page.url,
            texts = removed.texts,
            images = removed.images,
            "feature_deleted"
        );
        Ok(removed)
    }

    /// Edit a page's name and/or url. A url change is pushed to every link
    /// and menu item of the page.
    #[instrument(skip(self))]
    pub async fn update_page(&self, id: i32, changes: PageChanges) -> Result<page::Model, ServiceError> {
        if changes.is_empty() {
            return page::Entity::find_by_id(id)
                .one(&self.db)
                .await?
                .ok_or_else(|| ServiceError::not_found("page"));
        }

        let txn = self.db.begin().await?;
        let result = apply_page_changes(&txn, id, &changes).await;
        let page = finish(txn, "update_page", result).await?;

        info!(page_id = page.id, url = %page.url, "page_updated");
        Ok(page)
    }

    /// Replace title and content of the page's body text (the one outside any
    /// section). Hero and other slot texts of the page are never touched.
    /// Single-row write, no transaction.
    #[instrument(skip(self, content))]
    pub async fn update_text_by_page(&self, page_id: i32, title: &str, content: &str) -> Result<text::Model, ServiceError> {
        let body = text::Entity::find()
            .filter(text::Column::PageId.eq(page_id))
            .filter(text::Column::SectionId.is_null())
            .order_by_asc(text::Column::Id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("page text"))?;
        let updated = text::update_body(&self.db, body, title, content)
            .await
            .map_err(step("update_text"))?;
        info!(page_id, text_id = updated.id, "page_text_updated");
        Ok(updated)
    }
}

fn required_label(label: &str) -> Result<&str, ServiceError> {
    let label = label.trim();
    if label.is_empty() {
        return Err(ServiceError::Validation("label required".into()));
    }
    Ok(label)
}

/// Commit on success; otherwise log and roll back.
async fn finish<T>(txn: DatabaseTransaction, op: &'static str, result: Result<T, ServiceError>) -> Result<T, ServiceError> {
    match result {
        Ok(value) => {
            txn.commit().await?;
            Ok(value)
        }
        Err(e) => {
            warn!(op, code = e.code(), error = %e, "feature_rolled_back");
            if let Err(rb) = txn.rollback().await {
                warn!(op, error = %rb, "rollback_failed");
            }
            Err(e)
        }
    }
}

async fn ensure_menu<C: ConnectionTrait>(db: &C, menu_id: i32) -> Result<(), ServiceError> {
    match menu::Entity::find_by_id(menu_id).one(db).await? {
        Some(_) => Ok(()),
        None => Err(ServiceError::not_found("menu")),
    }
}

async fn ensure_url_free<C: ConnectionTrait>(
    db: &C,
    url: &str,
    except: Option<i32>,
    at: &'static str,
) -> Result<(), ServiceError> {
    if page::url_taken(db, url, except).await.map_err(step(at))? {
        return Err(ServiceError::DuplicateKey(format!("page url '{url}' already exists")).at_step(at));
    }
    Ok(())
}

async fn create_triad<C: ConnectionTrait>(db: &C, menu_id: i32, label: &str, url: &str) -> Result<Feature, ServiceError> {
    ensure_menu(db, menu_id).await?;
    ensure_url_free(db, url, None, "create_page").await?;

    let page = page::create(db, label, url).await.map_err(step("create_page"))?;
    let link = link::create(db, menu_id, label, &page.url, Some(page.id))
        .await
        .map_err(step("create_link"))?;
    let menu_item = menu_item::create(db, menu_id, label, Some(&page.url), Some(page.id))
        .await
        .map_err(step("create_menu_item"))?;
    Ok(Feature { menu_item, link, page })
}

/// Menu item by label first, then link by label; either leads to the page.
async fn resolve_by_label<C: ConnectionTrait>(db: &C, label: &str) -> Result<Triad, ServiceError> {
    let page_id = match menu_item::find_by_label(db, label).await? {
        Some(item) => item.page_id,
        None => match link::find_by_label(db, label).await? {
            Some(link) => link.page_id,
            None => return Err(ServiceError::NotFound(format!("feature '{label}' not found"))),
        },
    };
    resolve_by_page(db, page_id, label).await
}

async fn resolve_by_page<C: ConnectionTrait>(db: &C, page_id: Option<i32>, label: &str) -> Result<Triad, ServiceError> {
    let missing = || ServiceError::DependencyMissing(format!("feature '{label}' has no page"));
    let page_id = page_id.ok_or_else(missing)?;
    let page = page::Entity::find_by_id(page_id).one(db).await?.ok_or_else(missing)?;
    let links = link::find_by_page(db, page.id).await?;
    let menu_items = menu_item::find_by_page(db, page.id).await?;
    Ok(Triad { page, menu_items, links })
}

async fn rename_triad<C: ConnectionTrait>(
    db: &C,
    triad: Triad,
    label: &str,
    menu_id: Option<i32>,
) -> Result<Feature, ServiceError> {
    if triad.links.is_empty() {
        return Err(ServiceError::DependencyMissing(format!("page '{}' has no link", triad.page.url)));
    }
    if triad.menu_items.is_empty() {
        return Err(ServiceError::DependencyMissing(format!("page '{}' has no menu item", triad.page.url)));
    }
    if let Some(m) = menu_id {
        ensure_menu(db, m).await?;
    }
    let url = slug::page_url(label);
    ensure_url_free(db, &url, Some(triad.page.id), "update_page").await?;

    let page = page::update(db, triad.page, Some(label), Some(&url))
        .await
        .map_err(step("update_page"))?;

    let mut links = Vec::with_capacity(triad.links.len());
    for l in triad.links {
        links.push(
            link::retarget(db, l, Some(label), Some(&page.url), menu_id)
                .await
                .map_err(step("update_link"))?,
        );
    }
    let mut items = Vec::with_capacity(triad.menu_items.len());
    for item in triad.menu_items {
        items.push(
            menu_item::retarget(db, item, Some(label), Some(&page.url), menu_id)
                .await
                .map_err(step("update_menu_item"))?,
        );
    }

    let (Some(link), Some(menu_item)) = (links.into_iter().next(), items.into_iter().next()) else {
        return Err(ServiceError::DependencyMissing("feature lost its link or menu item".into()));
    };
    Ok(Feature { menu_item, link, page })
}

async fn delete_triad<C: ConnectionTrait>(db: &C, triad: Triad) -> Result<RemovedFeature, ServiceError> {
    let page_id = triad.page.id;
    let texts = text::Entity::find()
        .filter(text::Column::PageId.eq(page_id))
        .count(db)
        .await?;
    let images = image::Entity::find()
        .filter(image::Column::PageId.eq(page_id))
        .count(db)
        .await?;

    link::delete_by_page(db, page_id).await.map_err(step("delete_link"))?;
    if page::delete(db, page_id).await.map_err(step("delete_page"))? == 0 {
        return Err(ServiceError::DependencyMissing(format!("page {page_id} vanished")).at_step("delete_page"));
    }
    // menu items are normally gone with the page already
    for item in &triad.menu_items {
        menu_item::delete(db, item.id).await.map_err(step("delete_menu_item"))?;
    }

    Ok(RemovedFeature {
        page: triad.page,
        menu_item: triad.menu_items.into_iter().next(),
        link: triad.links.into_iter().next(),
        texts,
        images,
    })
}

async fn apply_page_changes<C: ConnectionTrait>(db: &C, id: i32, changes: &PageChanges) -> Result<page::Model, ServiceError> {
    let current = page::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("page"))?;

    let new_url = changes.url.as_deref().filter(|u| *u != current.url);
    if let Some(url) = new_url {
        ensure_url_free(db, url, Some(id), "update_page").await?;
    }

    let page = page::update(db, current, changes.name.as_deref(), new_url)
        .await
        .map_err(step("update_page"))?;

    if new_url.is_some() {
        for l in link::find_by_page(db, page.id).await? {
            link::retarget(db, l, None, Some(&page.url), None)
                .await
                .map_err(step("sync_link"))?;
        }
        for item in menu_item::find_by_page(db, page.id).await? {
            menu_item::retarget(db, item, None, Some(&page.url), None)
                .await
                .map_err(step("sync_menu_item"))?;
        }
    }
    Ok(page)
}
