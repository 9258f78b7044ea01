use crate::app_data::AppData;
use crate::errors::InternalError;
use crate::errors::internal::ItemError;
use crate::services::tag_service::insert_unique;
use crate::services::{begin_transaction, commit_transaction};
use crate::stores::item_store::NewItem;
use crate::stores::{ItemStore, TagStore};
use crate::types::internal::{ItemWithTags, TagName};
use sea_orm::DatabaseConnection;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Input for creating an item
#[derive(Debug, Clone)]
pub struct CreateItemInput {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    /// Raw tag names; normalized and resolved to existing tags or created
    pub tag_names: Vec<String>,
}

/// Item service orchestrating item creation and tag replacement
pub struct ItemService {
    db: DatabaseConnection,
    item_store: Arc<ItemStore>,
    tag_store: Arc<TagStore>,
}

impl ItemService {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            db: app_data.db.clone(),
            item_store: Arc::clone(&app_data.item_store),
            tag_store: Arc::clone(&app_data.tag_store),
        }
    }

    /// Create an item and attach its initial tags
    ///
    /// Tag names go through the same normalization as `TagService::create_tag`.
    /// A name matching an existing tag reuses it; otherwise a new tag is created.
    /// Everything runs in one transaction.
    ///
    /// # Returns
    /// * `Ok(ItemWithTags)` - The stored item and its tags
    /// * `Err(ItemError::InvalidName | InvalidPrice)` - Validation failed
    /// * `Err(TagError::EmptyName)` - A tag name is blank after normalization
    pub async fn create_item(&self, input: CreateItemInput) -> Result<ItemWithTags, InternalError> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(ItemError::InvalidName.into());
        }
        if !input.price.is_finite() || input.price < 0.0 {
            return Err(ItemError::InvalidPrice { price: input.price }.into());
        }
        let tag_names = input
            .tag_names
            .iter()
            .map(|raw| TagName::parse(raw))
            .collect::<Result<BTreeSet<_>, _>>()?;

        let txn = begin_transaction(&self.db).await?;

        let item = self
            .item_store
            .create(
                &txn,
                NewItem {
                    name: name.to_string(),
                    description: input.description,
                    price: input.price,
                },
            )
            .await?;

        let mut tags = Vec::with_capacity(tag_names.len());
        for tag_name in &tag_names {
            let tag = match self.tag_store.find_by_name(&txn, tag_name).await? {
                Some(existing) => existing,
                None => insert_unique(&self.tag_store, &txn, tag_name).await?,
            };
            tags.push(tag);
        }

        let tag_ids: BTreeSet<i32> = tags.iter().map(|t| t.id).collect();
        self.item_store.replace_tags(&txn, item.id, &tag_ids).await?;

        commit_transaction(txn).await?;

        tracing::info!(item_id = item.id, tag_count = tags.len(), "Item created");

        Ok(ItemWithTags::new(item, tags))
    }

    /// All items with their tags, ordered by id
    pub async fn list_items(&self) -> Result<Vec<ItemWithTags>, InternalError> {
        self.item_store.list_with_tags(&self.db).await
    }

    pub async fn get_item(&self, item_id: i32) -> Result<ItemWithTags, InternalError> {
        self.item_store.find_with_tags(&self.db, item_id).await
    }

    /// Replace the item's full tag set with the tags named by `tag_ids`
    ///
    /// Ids that do not resolve to a tag are dropped without error, so the
    /// result is whatever subset exists. An empty list detaches every tag.
    ///
    /// # Returns
    /// * `Ok(ItemWithTags)` - The item with its new tag set
    /// * `Err(ItemError::ItemNotFound)` - No item with this id
    pub async fn set_item_tags(&self, item_id: i32, tag_ids: &[i32]) -> Result<ItemWithTags, InternalError> {
        let requested: Vec<i32> = tag_ids.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();

        let txn = begin_transaction(&self.db).await?;

        let item = self.item_store.find_by_id(&txn, item_id).await?;
        let tags = self.tag_store.find_by_ids(&txn, &requested).await?;

        let resolved: BTreeSet<i32> = tags.iter().map(|t| t.id).collect();
        if resolved.len() < requested.len() {
            tracing::debug!(
                item_id,
                ignored = requested.len() - resolved.len(),
                "Ignoring unknown tag ids"
            );
        }

        self.item_store.replace_tags(&txn, item_id, &resolved).await?;
        let item = self.item_store.touch(&txn, item).await?;

        commit_transaction(txn).await?;

        tracing::info!(item_id, tag_count = tags.len(), "Item tags replaced");

        Ok(ItemWithTags::new(item, tags))
    }
}

#[cfg(test)]
#[path = "item_service_tests.rs"]
mod item_service_tests;
