// Common test utilities for integration tests

use loyalty_backend::api::build_routes;
use loyalty_backend::AppData;
use migration::{CatalogMigrator, MigratorTrait};
use poem::test::TestClient;
use poem::Route;
use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;

/// Creates an in-memory catalog database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    CatalogMigrator::up(&db, None)
        .await
        .expect("Failed to run catalog migrations");

    db
}

/// HTTP test client over the full route tree, backed by a fresh database
pub async fn setup_test_client() -> TestClient<Route> {
    let app_data = Arc::new(AppData::new(setup_test_db().await));
    TestClient::new(build_routes(app_data, "http://localhost/api"))
}
