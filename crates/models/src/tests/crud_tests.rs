use crate::errors::ModelError;
use crate::image::NewImage;
use crate::tests::setup_test_db;
use crate::text::NewText;
use crate::{image, link, menu, menu_item, page, section, text};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use anyhow::Result;

/// Test page CRUD operations
#[tokio::test]
async fn test_page_crud() -> Result<()> {
    let db = setup_test_db().await?;

    let created = page::create(&db, "Payslips", "/payslips").await?;
    assert_eq!(created.name, "Payslips");
    assert_eq!(created.url, "/payslips");
    assert_eq!(created.created_at, created.updated_at);

    let found = page::find_by_url(&db, "/payslips").await?.expect("page by url");
    assert_eq!(found.id, created.id);

    let updated = page::update(&db, found, Some("My Payslips"), Some("/my-payslips")).await?;
    assert_eq!(updated.name, "My Payslips");
    assert_eq!(updated.url, "/my-payslips");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
    assert!(page::find_by_url(&db, "/payslips").await?.is_none());

    assert_eq!(page::delete(&db, created.id).await?, 1);
    assert!(page::Entity::find_by_id(created.id).one(&db).await?.is_none());
    assert_eq!(page::delete(&db, created.id).await?, 0);
    Ok(())
}

#[tokio::test]
async fn test_page_validation() -> Result<()> {
    let db = setup_test_db().await?;

    assert!(matches!(page::create(&db, "", "/x").await, Err(ModelError::Validation(_))));
    assert!(matches!(page::create(&db, "X", "x").await, Err(ModelError::Validation(_))));
    assert!(matches!(page::create(&db, "X", "/a b").await, Err(ModelError::Validation(_))));
    assert!(page::Entity::find().all(&db).await?.is_empty());
    Ok(())
}

/// Unique keys fail instead of overwriting
#[tokio::test]
async fn test_unique_keys_reject_duplicates() -> Result<()> {
    let db = setup_test_db().await?;

    let first = page::create(&db, "DGI", "/dgi").await?;
    let err = page::create(&db, "DGI again", "/dgi").await.unwrap_err();
    assert!(matches!(err, ModelError::Duplicate(ref m) if m.contains("/dgi")), "{err}");
    let still = page::find_by_url(&db, "/dgi").await?.expect("original page");
    assert_eq!(still.id, first.id);
    assert_eq!(still.name, "DGI");

    menu::create(&db, "features").await?;
    assert!(matches!(menu::create(&db, "features").await, Err(ModelError::Duplicate(_))));

    image::create(&db, NewImage { name: "ngomna_logo", url: "/ngomna_logo.png", ..Default::default() }).await?;
    let err = image::create(&db, NewImage { name: "ngomna_logo", url: "/other.png", ..Default::default() })
        .await
        .unwrap_err();
    assert!(matches!(err, ModelError::Duplicate(_)));

    // renaming onto a taken url is a duplicate as well
    let other = page::create(&db, "OTP", "/otp").await?;
    let err = page::update(&db, other, None, Some("/dgi")).await.unwrap_err();
    assert!(matches!(err, ModelError::Duplicate(_)));
    Ok(())
}

#[tokio::test]
async fn test_url_taken_excludes_self() -> Result<()> {
    let db = setup_test_db().await?;
    let p = page::create(&db, "Census", "/census").await?;

    assert!(page::url_taken(&db, "/census", None).await?);
    assert!(!page::url_taken(&db, "/census", Some(p.id)).await?);
    assert!(!page::url_taken(&db, "/vision", None).await?);
    Ok(())
}

/// Menu items and links require an existing menu
#[tokio::test]
async fn test_menu_item_and_link_require_menu() -> Result<()> {
    let db = setup_test_db().await?;
    let p = page::create(&db, "Security", "/security").await?;

    let err = menu_item::create(&db, 999, "security", Some("/security"), Some(p.id)).await.unwrap_err();
    assert!(matches!(err, ModelError::MissingReference(_)), "{err}");
    let err = link::create(&db, 999, "security", "/security", Some(p.id)).await.unwrap_err();
    assert!(matches!(err, ModelError::MissingReference(_)), "{err}");

    let m = menu::create(&db, "features").await?;
    let err = link::create(&db, m.id, "ghost", "/ghost", Some(p.id + 100)).await.unwrap_err();
    assert!(matches!(err, ModelError::MissingReference(_)), "{err}");
    Ok(())
}

#[tokio::test]
async fn test_menu_item_and_link_crud() -> Result<()> {
    let db = setup_test_db().await?;
    let m = menu::create(&db, "features").await?;
    let other = menu::create(&db, "footer").await?;
    let p = page::create(&db, "Children", "/children").await?;

    let item = menu_item::create(&db, m.id, "children", Some("/children"), Some(p.id)).await?;
    let l = link::create(&db, m.id, "children", "/children", Some(p.id)).await?;

    assert_eq!(menu_item::find_by_label(&db, "children").await?.map(|i| i.id), Some(item.id));
    assert_eq!(link::find_by_label(&db, "children").await?.map(|x| x.id), Some(l.id));
    assert_eq!(menu_item::find_by_page(&db, p.id).await?.len(), 1);
    assert_eq!(link::find_by_page(&db, p.id).await?.len(), 1);

    let moved = menu_item::retarget(&db, item, Some("Kids"), Some("/kids"), Some(other.id)).await?;
    assert_eq!(moved.label, "Kids");
    assert_eq!(moved.url.as_deref(), Some("/kids"));
    assert_eq!(moved.menu_id, other.id);

    let relabelled = link::retarget(&db, l, Some("Kids"), None, None).await?;
    assert_eq!(relabelled.label, "Kids");
    assert_eq!(relabelled.url, "/children");
    assert_eq!(relabelled.menu_id, m.id);

    assert_eq!(link::delete_by_page(&db, p.id).await?, 1);
    assert_eq!(menu_item::delete(&db, moved.id).await?, 1);
    Ok(())
}

/// A menu item may exist without a page or url
#[tokio::test]
async fn test_menu_item_without_page() -> Result<()> {
    let db = setup_test_db().await?;
    let m = menu::create(&db, "external").await?;
    let item = menu_item::create(&db, m.id, "Partners", None, None).await?;
    assert!(item.url.is_none());
    assert!(item.page_id.is_none());
    Ok(())
}

#[tokio::test]
async fn test_text_and_image_scopes() -> Result<()> {
    let db = setup_test_db().await?;
    let p = page::create(&db, "Mission", "/mission").await?;
    let hero = section::create(&db, "hero").await?;

    let shared = text::create(&db, NewText { title: "nGomna", content: "Bringing citizens closer", section_id: Some(hero.id), ..Default::default() }).await?;
    let body = text::create(&db, NewText { title: "Mission", content: "Our mission", page_id: Some(p.id), ..Default::default() }).await?;
    assert_eq!(shared.page_id, None);
    assert_eq!(body.section_id, None);

    let bodies = text::Entity::find()
        .filter(text::Column::PageId.eq(p.id))
        .filter(text::Column::SectionId.is_null())
        .all(&db)
        .await?;
    assert_eq!(bodies, vec![body.clone()]);

    let edited = text::update_body(&db, body, "Mission", "Serving you").await?;
    assert_eq!(edited.content, "Serving you");

    let img = image::create(&db, NewImage { name: "phone_image", url: "/phone_image.png", page_id: Some(p.id), section_id: Some(hero.id) }).await?;
    assert_eq!(image::find_by_name(&db, "phone_image").await?.map(|i| i.id), Some(img.id));
    assert!(image::find_by_name(&db, "missing").await?.is_none());

    assert_eq!(text::delete(&db, shared.id).await?, 1);
    assert_eq!(image::delete(&db, img.id).await?, 1);
    Ok(())
}

/// Models serialize with snake_case column names for API consumers
#[tokio::test]
async fn test_models_serialize() -> Result<()> {
    let db = setup_test_db().await?;
    let m = menu::create(&db, "features").await?;
    let p = page::create(&db, "Gov AI", "/gov-ai").await?;
    let item = menu_item::create(&db, m.id, "Gov AI", Some("/gov-ai"), Some(p.id)).await?;

    let json = serde_json::to_value(&item)?;
    assert_eq!(json["label"], "Gov AI");
    assert_eq!(json["menu_id"], m.id);
    assert_eq!(json["page_id"], p.id);
    assert_eq!(json["url"], "/gov-ai");
    Ok(())
}
