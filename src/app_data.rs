use std::sync::Arc;
use sea_orm::DatabaseConnection;
use crate::stores::{ItemStore, TagStore};

/// Centralized application data, created once in main.rs
///
/// ```text
/// main.rs
///   ↓ init_database() + migrate_database()
/// AppData::new(db)
///   ├─ db (DatabaseConnection, pooled and cheap to clone)
///   ├─ item_store (Arc<ItemStore>)
///   └─ tag_store (Arc<TagStore>)
///   ↓ wrapped in Arc<AppData>
///   ├─ ItemService::new(app_data) / TagService::new(app_data)
///   └─ HealthApi::new(app_data)
/// ```
pub struct AppData {
    pub db: DatabaseConnection,
    pub item_store: Arc<ItemStore>,
    pub tag_store: Arc<TagStore>,
}

impl AppData {
    /// Database connection should be established and migrated before calling this
    pub fn new(db: DatabaseConnection) -> Self {
        tracing::debug!("Creating stores...");

        Self {
            db,
            item_store: Arc::new(ItemStore::new()),
            tag_store: Arc::new(TagStore::new()),
        }
    }
}
