// Test utilities shared across unit tests
// Only compiled when running tests

use migration::{CatalogMigrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;
use crate::app_data::AppData;

/// Creates an in-memory SQLite database with all migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    CatalogMigrator::up(&db, None)
        .await
        .expect("Failed to run catalog migrations");

    db
}

/// Creates AppData backed by a fresh in-memory database
pub async fn setup_test_app_data() -> Arc<AppData> {
    let db = setup_test_db().await;
    Arc::new(AppData::new(db))
}
