#![cfg(test)]
use sea_orm::DatabaseConnection;

/// Fresh, migrated in-memory database per test. SQLite keeps a `:memory:`
/// database alive only as long as its single pooled connection, so tests
/// never share state.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    common::utils::logging::init_test_logging();
    models::db::connect_in_memory().await
}
