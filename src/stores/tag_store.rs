use crate::errors::InternalError;
use crate::errors::internal::TagError;
use crate::types::db::{item_tag, tag};
use crate::types::internal::TagName;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};

/// TagStore reads and writes the `tags` table
///
/// Stateless: every method takes the connection (or transaction) to run on.
#[derive(Debug, Default)]
pub struct TagStore {}

impl TagStore {
    pub fn new() -> Self {
        Self {}
    }

    /// Insert a tag with an already-normalized name
    ///
    /// A concurrent insert of the same name surfaces as a
    /// `DatabaseError::ConstraintViolation` from the unique index.
    pub async fn create(
        &self,
        conn: &impl ConnectionTrait,
        name: &TagName,
    ) -> Result<tag::Model, InternalError> {
        let new_tag = tag::ActiveModel {
            name: Set(name.as_str().to_string()),
            created_at: Set(Utc::now().timestamp()),
            ..Default::default()
        };

        new_tag
            .insert(conn)
            .await
            .map_err(|e| InternalError::database("create_tag", e))
    }

    /// Exact match on the stored (normalized) name
    pub async fn find_by_name(
        &self,
        conn: &impl ConnectionTrait,
        name: &TagName,
    ) -> Result<Option<tag::Model>, InternalError> {
        tag::Entity::find()
            .filter(tag::Column::Name.eq(name.as_str()))
            .one(conn)
            .await
            .map_err(|e| InternalError::database("find_tag_by_name", e))
    }

    /// Resolve ids to tags, silently skipping ids with no row
    pub async fn find_by_ids(
        &self,
        conn: &impl ConnectionTrait,
        tag_ids: &[i32],
    ) -> Result<Vec<tag::Model>, InternalError> {
        if tag_ids.is_empty() {
            return Ok(Vec::new());
        }

        tag::Entity::find()
            .filter(tag::Column::Id.is_in(tag_ids.iter().copied()))
            .order_by_asc(tag::Column::Id)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("find_tags_by_ids", e))
    }

    pub async fn list(&self, conn: &impl ConnectionTrait) -> Result<Vec<tag::Model>, InternalError> {
        tag::Entity::find()
            .order_by_asc(tag::Column::Id)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("list_tags", e))
    }

    /// Delete a tag and every item link pointing at it
    ///
    /// The join rows are removed explicitly so the result does not depend on
    /// the backend enforcing the foreign key cascade.
    ///
    /// # Returns
    /// * `Ok(())` - Tag deleted
    /// * `Err(InternalError::Tag(TagNotFound))` - No tag with this id
    pub async fn delete(&self, conn: &impl ConnectionTrait, tag_id: i32) -> Result<(), InternalError> {
        item_tag::Entity::delete_many()
            .filter(item_tag::Column::TagId.eq(tag_id))
            .exec(conn)
            .await
            .map_err(|e| InternalError::database("delete_tag_links", e))?;

        let result = tag::Entity::delete_by_id(tag_id)
            .exec(conn)
            .await
            .map_err(|e| InternalError::database("delete_tag", e))?;

        if result.rows_affected == 0 {
            return Err(TagError::TagNotFound { tag_id }.into());
        }

        Ok(())
    }
}
