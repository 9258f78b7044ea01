use poem_openapi::{ApiResponse, Object};
use serde::{Deserialize, Serialize};
use crate::types::db::tag;
use crate::types::dto::common::to_rfc3339;

/// Request model for creating a tag
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CreateTagRequest {
    /// Tag name; stored lower-cased with all whitespace removed
    #[oai(validator(min_length = 1))]
    pub name: String,
}

/// Response model representing a tag
#[derive(Object, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagResponse {
    pub id: i32,

    /// Normalized tag name
    pub name: String,

    /// Timestamp when the tag was created (ISO 8601 format)
    pub created_at: String,
}

impl From<tag::Model> for TagResponse {
    fn from(tag: tag::Model) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
            created_at: to_rfc3339(tag.created_at),
        }
    }
}

/// API response for tag deletion
#[derive(ApiResponse)]
pub enum DeleteTagApiResponse {
    /// Tag deleted
    #[oai(status = 204)]
    NoContent,
}
