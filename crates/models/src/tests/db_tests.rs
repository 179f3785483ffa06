use crate::db::{connect_with_config, migrate};
use crate::tests::setup_test_db;
use crate::{menu, page};
use configs::DatabaseConfig;
use sea_orm::{ConnectionTrait, DatabaseBackend, EntityTrait, Statement};
use anyhow::Result;

/// Test basic in-memory connection answers queries
#[tokio::test]
async fn test_basic_connection() -> Result<()> {
    let db = connect_with_config(&DatabaseConfig::in_memory()).await?;
    assert_eq!(db.get_database_backend(), DatabaseBackend::Sqlite);

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, "SELECT 1 AS test".to_string());
    let row = db.query_one(stmt).await?.expect("one row");
    let value: i32 = row.try_get("", "test")?;
    assert_eq!(value, 1);
    Ok(())
}

/// Foreign keys must be enforced or none of the cascades apply
#[tokio::test]
async fn test_foreign_keys_enabled() -> Result<()> {
    let db = setup_test_db().await?;
    let stmt = Statement::from_string(DatabaseBackend::Sqlite, "PRAGMA foreign_keys".to_string());
    let row = db.query_one(stmt).await?.expect("pragma row");
    let enabled: i32 = row.try_get_by_index(0)?;
    assert_eq!(enabled, 1);
    Ok(())
}

/// Running the migrator twice is a no-op
#[tokio::test]
async fn test_migrations_are_idempotent() -> Result<()> {
    let db = setup_test_db().await?;
    migrate(&db).await?;

    assert!(page::Entity::find().all(&db).await?.is_empty());
    assert!(menu::Entity::find().all(&db).await?.is_empty());
    Ok(())
}
