// Stores layer - Data access for items, tags and the item_tags join
pub mod item_store;
pub mod tag_store;

pub use item_store::ItemStore;
pub use tag_store::TagStore;
