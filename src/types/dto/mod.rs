// Request and response models for the HTTP layer
pub mod common;
pub mod items;
pub mod tags;
