use thiserror::Error;

pub mod database;
pub mod item;
pub mod tag;

pub use database::DatabaseError;
pub use item::ItemError;
pub use tag::TagError;

/// Internal error type for store and service operations
///
/// Infrastructure failures (`Database`) are kept apart from the domain errors of
/// each entity. Not exposed via API - endpoints convert through `CatalogError`.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Item(#[from] ItemError),

    #[error(transparent)]
    Tag(#[from] TagError),
}

impl InternalError {
    /// Wrap a failed query, classifying constraint violations
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::classify(operation, source))
    }

    /// True when the underlying failure is a unique constraint violation
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            InternalError::Database(DatabaseError::ConstraintViolation { .. })
        )
    }
}
