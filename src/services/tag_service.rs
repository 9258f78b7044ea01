use crate::app_data::AppData;
use crate::errors::InternalError;
use crate::errors::internal::TagError;
use crate::services::{begin_transaction, commit_transaction};
use crate::stores::TagStore;
use crate::types::db::tag;
use crate::types::internal::TagName;
use sea_orm::{ConnectionTrait, DatabaseConnection};
use std::sync::Arc;

/// Tag service enforcing name normalization and uniqueness
pub struct TagService {
    db: DatabaseConnection,
    tag_store: Arc<TagStore>,
}

impl TagService {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            db: app_data.db.clone(),
            tag_store: Arc::clone(&app_data.tag_store),
        }
    }

    /// Create a tag from a raw, user-supplied name
    ///
    /// The name is normalized first. The lookup gives the common duplicate case
    /// a clear error; the unique index on `tags.name` catches the race where two
    /// requests pass the lookup at the same time.
    ///
    /// # Returns
    /// * `Ok(Model)` - The stored tag, name in normalized form
    /// * `Err(TagError::EmptyName)` - Name is blank after normalization
    /// * `Err(TagError::DuplicateName)` - A tag with this normalized name exists
    pub async fn create_tag(&self, raw_name: &str) -> Result<tag::Model, InternalError> {
        let name = TagName::parse(raw_name)?;

        if self.tag_store.find_by_name(&self.db, &name).await?.is_some() {
            return Err(TagError::DuplicateName { name: name.into_inner() }.into());
        }

        let tag = insert_unique(&self.tag_store, &self.db, &name).await?;
        tracing::info!(tag_id = tag.id, name = %tag.name, "Tag created");

        Ok(tag)
    }

    pub async fn list_tags(&self) -> Result<Vec<tag::Model>, InternalError> {
        self.tag_store.list(&self.db).await
    }

    /// Delete a tag; items that referenced it simply lose the link
    pub async fn delete_tag(&self, tag_id: i32) -> Result<(), InternalError> {
        let txn = begin_transaction(&self.db).await?;
        self.tag_store.delete(&txn, tag_id).await?;
        commit_transaction(txn).await?;

        tracing::info!(tag_id, "Tag deleted");

        Ok(())
    }
}

/// Insert `name`, reporting a unique index violation as a duplicate name
pub(crate) async fn insert_unique(
    tag_store: &TagStore,
    conn: &impl ConnectionTrait,
    name: &TagName,
) -> Result<tag::Model, InternalError> {
    match tag_store.create(conn, name).await {
        Err(err) if err.is_constraint_violation() => {
            tracing::warn!(name = %name, "Concurrent tag creation lost the race: {}", err);
            Err(TagError::DuplicateName {
                name: name.as_str().to_string(),
            }
            .into())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::utils::setup_test_app_data;

    #[tokio::test]
    async fn test_create_tag_stores_normalized_name() {
        let service = TagService::new(setup_test_app_data().await);

        let tag = service.create_tag("New Customer").await.expect("create tag");

        assert_eq!(tag.name, "newcustomer");
    }

    #[tokio::test]
    async fn test_create_tag_conflicts_after_normalization() {
        let service = TagService::new(setup_test_app_data().await);

        service.create_tag("VIP").await.expect("first create");
        let err = service.create_tag("vip").await.unwrap_err();

        match err {
            InternalError::Tag(TagError::DuplicateName { name }) => assert_eq!(name, "vip"),
            other => panic!("Expected DuplicateName, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_tag_conflicts_on_whitespace_variants() {
        let service = TagService::new(setup_test_app_data().await);

        service.create_tag("  Gold Tier ").await.unwrap();
        let err = service.create_tag("goldtier").await.unwrap_err();

        assert!(matches!(err, InternalError::Tag(TagError::DuplicateName { .. })));
    }

    #[tokio::test]
    async fn test_create_tag_rejects_blank_name() {
        let service = TagService::new(setup_test_app_data().await);

        let err = service.create_tag(" \t ").await.unwrap_err();

        assert!(matches!(err, InternalError::Tag(TagError::EmptyName)));
        assert!(service.list_tags().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_insert_unique_maps_index_violation_to_duplicate() {
        let app_data = setup_test_app_data().await;
        let name = TagName::parse("Race").unwrap();

        // Bypass the lookup to simulate two requests that both passed it
        app_data.tag_store.create(&app_data.db, &name).await.unwrap();
        let err = insert_unique(&app_data.tag_store, &app_data.db, &name).await.unwrap_err();

        assert!(matches!(err, InternalError::Tag(TagError::DuplicateName { ref name }) if name == "race"));
    }

    #[tokio::test]
    async fn test_list_tags_sorted_by_id() {
        let service = TagService::new(setup_test_app_data().await);

        let b = service.create_tag("beta").await.unwrap();
        let a = service.create_tag("alpha").await.unwrap();

        let tags = service.list_tags().await.unwrap();
        assert_eq!(tags, vec![b, a]);
    }

    #[tokio::test]
    async fn test_delete_tag_twice_is_not_found() {
        let service = TagService::new(setup_test_app_data().await);
        let tag = service.create_tag("temporary").await.unwrap();

        service.delete_tag(tag.id).await.expect("first delete");
        let err = service.delete_tag(tag.id).await.unwrap_err();

        assert!(matches!(err, InternalError::Tag(TagError::TagNotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_unknown_tag_is_not_found() {
        let service = TagService::new(setup_test_app_data().await);

        let err = service.delete_tag(999).await.unwrap_err();

        assert!(matches!(err, InternalError::Tag(TagError::TagNotFound { tag_id: 999 })));
    }
}
