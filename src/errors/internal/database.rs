use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database error: {operation} failed: {source}")]
    Operation {
        operation: String,
        #[source]
        source: DbErr,
    },

    #[error("Constraint violation during {operation}: {source}")]
    ConstraintViolation {
        operation: String,
        #[source]
        source: DbErr,
    },

    /// `target` is the redacted URL; `reason` never carries credentials
    #[error("Connecting to {target} failed: {reason}")]
    Connect { target: String, reason: String },

    #[error("Starting transaction failed: {source}")]
    TransactionBegin {
        #[source]
        source: DbErr,
    },

    #[error("Committing transaction failed: {source}")]
    TransactionCommit {
        #[source]
        source: DbErr,
    },
}

impl DatabaseError {
    /// Build an error for `operation`, using the driver's error code to detect
    /// unique constraint violations instead of inspecting the message text.
    pub fn classify(operation: &str, source: DbErr) -> Self {
        match source.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => DatabaseError::ConstraintViolation {
                operation: operation.to_string(),
                source,
            },
            _ => DatabaseError::Operation {
                operation: operation.to_string(),
                source,
            },
        }
    }
}
