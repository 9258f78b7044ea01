use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};
use crate::app_data::AppData;
use crate::errors::CatalogError;
use crate::services::ItemService;
use crate::types::dto::items::{CreateItemRequest, ItemResponse, UpdateItemTagsRequest};
use std::sync::Arc;

/// Items API
pub struct ItemsApi {
    item_service: ItemService,
}

impl ItemsApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            item_service: ItemService::new(app_data),
        }
    }
}

/// API tags for item endpoints
#[derive(Tags)]
enum ApiTags {
    /// Item management endpoints
    Items,
}

#[OpenApi]
impl ItemsApi {
    /// Create a new item
    ///
    /// Tags given by name are normalized; existing tags are reused and missing ones created
    #[oai(path = "/items", method = "post", tag = "ApiTags::Items")]
    async fn create_item(&self, body: Json<CreateItemRequest>) -> Result<Json<ItemResponse>, CatalogError> {
        let item = self.item_service.create_item(body.0.into()).await?;
        Ok(Json(item.into()))
    }

    /// List all items with their tags
    #[oai(path = "/items", method = "get", tag = "ApiTags::Items")]
    async fn list_items(&self) -> Result<Json<Vec<ItemResponse>>, CatalogError> {
        let items = self.item_service.list_items().await?;
        Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
    }

    /// Get a single item with its tags
    #[oai(path = "/items/:id", method = "get", tag = "ApiTags::Items")]
    async fn get_item(&self, id: Path<i32>) -> Result<Json<ItemResponse>, CatalogError> {
        let item = self.item_service.get_item(id.0).await?;
        Ok(Json(item.into()))
    }

    /// Replace the item's tag set
    ///
    /// The body lists the complete new set. Unknown tag ids are ignored.
    #[oai(path = "/items/:id/tags", method = "patch", tag = "ApiTags::Items")]
    async fn update_item_tags(
        &self,
        id: Path<i32>,
        body: Json<UpdateItemTagsRequest>,
    ) -> Result<Json<ItemResponse>, CatalogError> {
        let tag_ids = body
            .0
            .tag_ids
            .ok_or_else(|| CatalogError::invalid_input("tag_ids is required"))?;
        let item = self.item_service.set_item_tags(id.0, &tag_ids).await?;
        Ok(Json(item.into()))
    }
}
