use crate::types::db::{item, tag};

/// An item together with its full tag set, tags ordered by id
#[derive(Debug, Clone, PartialEq)]
pub struct ItemWithTags {
    pub item: item::Model,
    pub tags: Vec<tag::Model>,
}

impl ItemWithTags {
    pub fn new(item: item::Model, mut tags: Vec<tag::Model>) -> Self {
        tags.sort_by_key(|t| t.id);
        Self { item, tags }
    }

    pub fn tag_ids(&self) -> Vec<i32> {
        self.tags.iter().map(|t| t.id).collect()
    }
}
