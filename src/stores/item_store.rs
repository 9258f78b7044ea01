use crate::errors::InternalError;
use crate::errors::internal::ItemError;
use crate::types::db::{item, item_tag, tag};
use crate::types::internal::ItemWithTags;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
};
use std::collections::{BTreeSet, HashMap};

/// Fields for a new item row
#[derive(Debug, Clone)]
pub struct NewItem {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

/// ItemStore reads and writes `items` and the `item_tags` join
///
/// Stateless: every method takes the connection (or transaction) to run on.
#[derive(Debug, Default)]
pub struct ItemStore {}

impl ItemStore {
    pub fn new() -> Self {
        Self {}
    }

    pub async fn create(
        &self,
        conn: &impl ConnectionTrait,
        new_item: NewItem,
    ) -> Result<item::Model, InternalError> {
        let now = Utc::now().timestamp();
        let model = item::ActiveModel {
            name: Set(new_item.name),
            description: Set(new_item.description),
            price: Set(new_item.price),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .insert(conn)
            .await
            .map_err(|e| InternalError::database("create_item", e))
    }

    /// # Returns
    /// * `Ok(Model)` - The item row
    /// * `Err(InternalError::Item(ItemNotFound))` - No item with this id
    pub async fn find_by_id(
        &self,
        conn: &impl ConnectionTrait,
        item_id: i32,
    ) -> Result<item::Model, InternalError> {
        item::Entity::find_by_id(item_id)
            .one(conn)
            .await
            .map_err(|e| InternalError::database("find_item_by_id", e))?
            .ok_or_else(|| ItemError::ItemNotFound { item_id }.into())
    }

    /// Load one item with its tag set
    pub async fn find_with_tags(
        &self,
        conn: &impl ConnectionTrait,
        item_id: i32,
    ) -> Result<ItemWithTags, InternalError> {
        let item = self.find_by_id(conn, item_id).await?;
        let tags = item
            .find_related(tag::Entity)
            .order_by_asc(tag::Column::Id)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("find_item_tags", e))?;

        Ok(ItemWithTags::new(item, tags))
    }

    /// All items ordered by id, each with its tag set
    ///
    /// Two queries regardless of item count: one for items, one for every
    /// link joined to its tag.
    pub async fn list_with_tags(&self, conn: &impl ConnectionTrait) -> Result<Vec<ItemWithTags>, InternalError> {
        let items = item::Entity::find()
            .order_by_asc(item::Column::Id)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("list_items", e))?;

        let links = item_tag::Entity::find()
            .find_also_related(tag::Entity)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("list_item_tags", e))?;

        let mut tags_by_item: HashMap<i32, Vec<tag::Model>> = HashMap::new();
        for (link, tag) in links {
            if let Some(tag) = tag {
                tags_by_item.entry(link.item_id).or_default().push(tag);
            }
        }

        Ok(items
            .into_iter()
            .map(|item| {
                let tags = tags_by_item.remove(&item.id).unwrap_or_default();
                ItemWithTags::new(item, tags)
            })
            .collect())
    }

    /// Tag ids currently linked to `item_id`
    pub async fn linked_tag_ids(
        &self,
        conn: &impl ConnectionTrait,
        item_id: i32,
    ) -> Result<BTreeSet<i32>, InternalError> {
        let links = item_tag::Entity::find()
            .filter(item_tag::Column::ItemId.eq(item_id))
            .all(conn)
            .await
            .map_err(|e| InternalError::database("find_item_links", e))?;

        Ok(links.into_iter().map(|link| link.tag_id).collect())
    }

    /// Overwrite the item's links so they equal `desired` exactly
    ///
    /// Computed as a set difference against the current links: stale links
    /// are deleted and missing ones inserted, untouched links stay as they are.
    /// Callers must pass ids that exist in `tags`.
    pub async fn replace_tags(
        &self,
        conn: &impl ConnectionTrait,
        item_id: i32,
        desired: &BTreeSet<i32>,
    ) -> Result<(), InternalError> {
        let current = self.linked_tag_ids(conn, item_id).await?;

        let stale: Vec<i32> = current.difference(desired).copied().collect();
        let missing: Vec<i32> = desired.difference(&current).copied().collect();

        if !stale.is_empty() {
            item_tag::Entity::delete_many()
                .filter(item_tag::Column::ItemId.eq(item_id))
                .filter(item_tag::Column::TagId.is_in(stale))
                .exec(conn)
                .await
                .map_err(|e| InternalError::database("detach_item_tags", e))?;
        }

        if !missing.is_empty() {
            let rows = missing.into_iter().map(|tag_id| item_tag::ActiveModel {
                item_id: Set(item_id),
                tag_id: Set(tag_id),
            });
            item_tag::Entity::insert_many(rows)
                .exec_without_returning(conn)
                .await
                .map_err(|e| InternalError::database("attach_item_tags", e))?;
        }

        Ok(())
    }

    /// Bump `updated_at` to now
    pub async fn touch(&self, conn: &impl ConnectionTrait, item: item::Model) -> Result<item::Model, InternalError> {
        let mut active: item::ActiveModel = item.into();
        active.updated_at = Set(Utc::now().timestamp());

        active
            .update(conn)
            .await
            .map_err(|e| InternalError::database("touch_item", e))
    }
}
