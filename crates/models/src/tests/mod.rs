/// Connection, migration and schema smoke tests
pub mod db_tests;

/// Create/update/delete primitives for every entity
pub mod crud_tests;

/// Foreign-key cascade and set-null behaviour
pub mod cascade_tests;


use sea_orm::DatabaseConnection;

/// Fresh migrated in-memory database per test.
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    crate::db::connect_in_memory().await
}
