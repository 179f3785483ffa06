use crate::image::NewImage;
use crate::tests::setup_test_db;
use crate::text::NewText;
use crate::{image, link, menu, menu_item, page, section, text};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use anyhow::Result;

struct Fixture {
    menu: menu::Model,
    page: page::Model,
    hero: section::Model,
    item: menu_item::Model,
    link: link::Model,
    hero_text: text::Model,
    body_text: text::Model,
    shared_text: text::Model,
    image: image::Model,
}

/// One page wired into every relationship, plus a shared header text.
async fn fixture(db: &DatabaseConnection) -> Result<Fixture> {
    let menu = menu::create(db, "features").await?;
    let page = page::create(db, "Census", "/census").await?;
    let hero = section::create(db, "hero").await?;
    let item = menu_item::create(db, menu.id, "census", Some("/census"), Some(page.id)).await?;
    let link = link::create(db, menu.id, "census", "/census", Some(page.id)).await?;
    let hero_text = text::create(db, NewText { title: "Census", content: "Manage census data", page_id: Some(page.id), section_id: Some(hero.id) }).await?;
    let body_text = text::create(db, NewText { title: "Census", content: "Welcome", page_id: Some(page.id), ..Default::default() }).await?;
    let shared_text = text::create(db, NewText { title: "nGomna", content: "Header", section_id: Some(hero.id), ..Default::default() }).await?;
    let image = image::create(db, NewImage { name: "census_banner", url: "/census.png", page_id: Some(page.id), section_id: Some(hero.id) }).await?;
    Ok(Fixture { menu, page, hero, item, link, hero_text, body_text, shared_text, image })
}

/// Deleting a page removes every dependent row
#[tokio::test]
async fn test_page_delete_cascades() -> Result<()> {
    let db = setup_test_db().await?;
    let f = fixture(&db).await?;

    assert_eq!(page::delete(&db, f.page.id).await?, 1);

    assert!(menu_item::Entity::find_by_id(f.item.id).one(&db).await?.is_none());
    assert!(link::Entity::find_by_id(f.link.id).one(&db).await?.is_none());
    assert!(text::Entity::find_by_id(f.hero_text.id).one(&db).await?.is_none());
    assert!(text::Entity::find_by_id(f.body_text.id).one(&db).await?.is_none());
    assert!(image::Entity::find_by_id(f.image.id).one(&db).await?.is_none());

    // rows not owned by the page survive
    assert!(text::Entity::find_by_id(f.shared_text.id).one(&db).await?.is_some());
    assert!(menu::Entity::find_by_id(f.menu.id).one(&db).await?.is_some());
    assert!(section::Entity::find_by_id(f.hero.id).one(&db).await?.is_some());
    Ok(())
}

/// Deleting a menu removes its items and links but not the pages
#[tokio::test]
async fn test_menu_delete_cascades() -> Result<()> {
    let db = setup_test_db().await?;
    let f = fixture(&db).await?;

    assert_eq!(menu::delete(&db, f.menu.id).await?, 1);

    assert_eq!(menu_item::Entity::find().count(&db).await?, 0);
    assert_eq!(link::Entity::find().count(&db).await?, 0);
    assert!(page::Entity::find_by_id(f.page.id).one(&db).await?.is_some());
    assert_eq!(text::Entity::find().count(&db).await?, 3);
    Ok(())
}

/// Deleting a section clears the slot on texts and images, nothing is removed
#[tokio::test]
async fn test_section_delete_sets_null() -> Result<()> {
    let db = setup_test_db().await?;
    let f = fixture(&db).await?;

    assert_eq!(section::delete(&db, f.hero.id).await?, 1);

    let hero_text = text::Entity::find_by_id(f.hero_text.id).one(&db).await?.expect("hero text survives");
    assert_eq!(hero_text.section_id, None);
    assert_eq!(hero_text.page_id, Some(f.page.id));

    let shared = text::Entity::find_by_id(f.shared_text.id).one(&db).await?.expect("shared text survives");
    assert_eq!(shared.section_id, None);
    assert_eq!(shared.page_id, None);

    let img = image::Entity::find_by_id(f.image.id).one(&db).await?.expect("image survives");
    assert_eq!(img.section_id, None);
    assert_eq!(img.page_id, Some(f.page.id));

    assert_eq!(text::Entity::find().count(&db).await?, 3);
    Ok(())
}

/// Relation definitions mirror the engine's foreign-key actions
#[test]
fn test_relation_defs_match_schema() {
    use sea_orm::sea_query::ForeignKeyAction;
    use sea_orm::RelationTrait;

    // ForeignKeyAction has no PartialEq
    assert!(matches!(menu_item::Relation::Menu.def().on_delete, Some(ForeignKeyAction::Cascade)));
    assert!(matches!(menu_item::Relation::Page.def().on_delete, Some(ForeignKeyAction::Cascade)));
    assert!(matches!(link::Relation::Menu.def().on_delete, Some(ForeignKeyAction::Cascade)));
    assert!(matches!(link::Relation::Page.def().on_delete, Some(ForeignKeyAction::Cascade)));
    assert!(matches!(text::Relation::Page.def().on_delete, Some(ForeignKeyAction::Cascade)));
    assert!(matches!(image::Relation::Page.def().on_delete, Some(ForeignKeyAction::Cascade)));
    assert!(matches!(text::Relation::Section.def().on_delete, Some(ForeignKeyAction::SetNull)));
    assert!(matches!(image::Relation::Section.def().on_delete, Some(ForeignKeyAction::SetNull)));
}
