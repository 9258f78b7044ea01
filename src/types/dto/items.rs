use poem_openapi::Object;
use serde::{Deserialize, Serialize};
use crate::services::CreateItemInput;
use crate::types::dto::common::to_rfc3339;
use crate::types::dto::tags::TagResponse;
use crate::types::internal::ItemWithTags;

/// Tag reference supplied when creating an item
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ItemTagInput {
    /// Tag name; normalized the same way as POST /tags
    #[oai(validator(min_length = 1))]
    pub name: String,
}

/// Request model for creating a new item
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CreateItemRequest {
    /// Name of the item (1-100 characters)
    #[oai(validator(min_length = 1))]
    pub name: String,

    /// Optional description of the item
    pub description: Option<String>,

    /// Price, must not be negative
    #[oai(validator(minimum(value = "0")))]
    pub price: f64,

    /// Tags to attach; existing tags are reused, missing ones created
    pub tags: Option<Vec<ItemTagInput>>,
}

impl From<CreateItemRequest> for CreateItemInput {
    fn from(req: CreateItemRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            price: req.price,
            tag_names: req
                .tags
                .unwrap_or_default()
                .into_iter()
                .map(|t| t.name)
                .collect(),
        }
    }
}

/// Request model for replacing an item's tags
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UpdateItemTagsRequest {
    /// Complete new tag set; unknown ids are ignored, [] detaches all.
    /// Required: omitting it is rejected rather than read as "detach all".
    pub tag_ids: Option<Vec<i32>>,
}

/// Response model representing an item with its tags
#[derive(Object, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemResponse {
    pub id: i32,

    pub name: String,

    pub description: Option<String>,

    pub price: f64,

    /// Associated tags, ordered by id
    pub tags: Vec<TagResponse>,

    /// Timestamp when the item was created (ISO 8601 format)
    pub created_at: String,

    /// Timestamp of the last tag change (ISO 8601 format)
    pub updated_at: String,
}

impl From<ItemWithTags> for ItemResponse {
    fn from(value: ItemWithTags) -> Self {
        let ItemWithTags { item, tags } = value;
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            price: item.price,
            tags: tags.into_iter().map(TagResponse::from).collect(),
            created_at: to_rfc3339(item.created_at),
            updated_at: to_rfc3339(item.updated_at),
        }
    }
}
