// API layer - HTTP endpoints
pub mod health;
pub mod items;
pub mod tags;

use std::sync::Arc;

pub use health::HealthApi;
pub use items::ItemsApi;
pub use tags::TagsApi;

use poem::Route;
use poem_openapi::OpenApiService;
use crate::app_data::AppData;

/// Compose every endpoint under `/api` and the Swagger UI under `/swagger`
///
/// `server_url` is advertised in the OpenAPI document.
pub fn build_routes(app_data: Arc<AppData>, server_url: &str) -> Route {
    let api_service = OpenApiService::new(
        (
            HealthApi::new(app_data.clone()),
            ItemsApi::new(app_data.clone()),
            TagsApi::new(app_data),
        ),
        "Loyalty Catalog API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(server_url);

    let ui = api_service.swagger_ui();

    Route::new().nest("/api", api_service).nest("/swagger", ui)
}
