#![cfg(test)]
use sea_orm::DatabaseConnection;

/// Fresh in-memory database with migrations applied; one per test.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    models::db::connect_in_memory().await
}
