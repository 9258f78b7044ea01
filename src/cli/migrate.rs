use crate::config::{init_database, migrate_database, BootstrapSettings};

/// Connect to the database and run all pending migrations
///
/// Does not start the HTTP server.
pub async fn run_migrations(settings: &BootstrapSettings) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Running database migrations...");

    let db = init_database(settings).await?;
    migrate_database(&db).await?;

    tracing::info!("All migrations completed successfully");

    Ok(())
}
