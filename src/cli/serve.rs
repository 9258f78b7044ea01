use std::sync::Arc;
use poem::{listener::TcpListener, Server};
use crate::api::build_routes;
use crate::app_data::AppData;
use crate::config::{init_database, migrate_database, BootstrapSettings};

/// Connect, migrate, and serve the HTTP API until the process is stopped
pub async fn run_server(settings: &BootstrapSettings) -> Result<(), Box<dyn std::error::Error>> {
    let db = init_database(settings).await?;
    migrate_database(&db).await?;

    let app_data = Arc::new(AppData::new(db));

    let address = settings.server_address();
    let server_url = format!("http://localhost:{}/api", settings.server_port());
    let app = build_routes(app_data, &server_url);

    tracing::info!("Starting server on http://{}", address);
    tracing::info!("Swagger UI available at http://localhost:{}/swagger", settings.server_port());

    Server::new(TcpListener::bind(address)).run(app).await?;

    Ok(())
}
