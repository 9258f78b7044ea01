use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};
use crate::app_data::AppData;
use crate::errors::CatalogError;
use crate::services::TagService;
use crate::types::dto::tags::{CreateTagRequest, DeleteTagApiResponse, TagResponse};
use std::sync::Arc;

/// Tags API
pub struct TagsApi {
    tag_service: TagService,
}

impl TagsApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            tag_service: TagService::new(app_data),
        }
    }
}

/// API tags for tag endpoints
#[derive(Tags)]
enum ApiTags {
    /// Tag management endpoints
    Tags,
}

#[OpenApi]
impl TagsApi {
    /// List all tags
    #[oai(path = "/tags", method = "get", tag = "ApiTags::Tags")]
    async fn list_tags(&self) -> Result<Json<Vec<TagResponse>>, CatalogError> {
        let tags = self.tag_service.list_tags().await?;
        Ok(Json(tags.into_iter().map(TagResponse::from).collect()))
    }

    /// Create a tag
    ///
    /// The name is lower-cased and stripped of whitespace before the uniqueness check
    #[oai(path = "/tags", method = "post", tag = "ApiTags::Tags")]
    async fn create_tag(&self, body: Json<CreateTagRequest>) -> Result<Json<TagResponse>, CatalogError> {
        let tag = self.tag_service.create_tag(&body.name).await?;
        Ok(Json(tag.into()))
    }

    /// Delete a tag and detach it from every item
    #[oai(path = "/tags/:id", method = "delete", tag = "ApiTags::Tags")]
    async fn delete_tag(&self, id: Path<i32>) -> Result<DeleteTagApiResponse, CatalogError> {
        self.tag_service.delete_tag(id.0).await?;
        Ok(DeleteTagApiResponse::NoContent)
    }
}
