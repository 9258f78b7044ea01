use thiserror::Error;

#[derive(Error, Debug)]
pub enum ItemError {
    #[error("Item not found: {item_id}")]
    ItemNotFound { item_id: i32 },

    #[error("Item name must not be empty")]
    InvalidName,

    #[error("Item price must be a non-negative number, got {price}")]
    InvalidPrice { price: f64 },
}
