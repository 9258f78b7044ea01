// Database entities - SeaORM models
pub mod item;
pub mod item_tag;
pub mod tag;
