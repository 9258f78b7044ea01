pub mod item_with_tags;
pub mod tag_name;

pub use item_with_tags::ItemWithTags;
pub use tag_name::{normalize, TagName};
