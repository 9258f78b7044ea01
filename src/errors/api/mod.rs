// API-facing error types
pub mod catalog;

pub use catalog::{CatalogError, CatalogErrorResponse};

#[cfg(test)]
mod catalog_test;
