use crate::errors::internal::{DatabaseError, InternalError, ItemError, TagError};
use poem_openapi::{ApiResponse, Object, payload::Json};
use std::fmt;

/// Standardized error response for item and tag endpoints
#[derive(Object, Debug)]
pub struct CatalogErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Error responses for the item and tag endpoints
#[derive(ApiResponse, Debug)]
pub enum CatalogError {
    /// Request failed validation
    #[oai(status = 400)]
    InvalidInput(Json<CatalogErrorResponse>),

    /// Item or tag not found
    #[oai(status = 404)]
    NotFound(Json<CatalogErrorResponse>),

    /// A tag with the same normalized name already exists
    #[oai(status = 409)]
    Conflict(Json<CatalogErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<CatalogErrorResponse>),
}

impl CatalogError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CatalogError::InvalidInput(Json(CatalogErrorResponse {
            error: "invalid_input".to_string(),
            message: message.into(),
            status_code: 400,
        }))
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        CatalogError::NotFound(Json(CatalogErrorResponse {
            error: "not_found".to_string(),
            message: message.into(),
            status_code: 404,
        }))
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        CatalogError::Conflict(Json(CatalogErrorResponse {
            error: "conflict".to_string(),
            message: message.into(),
            status_code: 409,
        }))
    }

    /// Generic 500 that never carries internal details
    fn internal_server_error() -> Self {
        CatalogError::InternalError(Json(CatalogErrorResponse {
            error: "internal_error".to_string(),
            message: "An internal error occurred".to_string(),
            status_code: 500,
        }))
    }

    /// Convert InternalError to CatalogError
    ///
    /// This is the only conversion point from internal errors to API errors.
    /// Infrastructure failures are logged and collapse to a generic 500.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::Item(ItemError::ItemNotFound { .. })
            | InternalError::Tag(TagError::TagNotFound { .. }) => Self::not_found(err.to_string()),

            InternalError::Item(ItemError::InvalidName)
            | InternalError::Item(ItemError::InvalidPrice { .. })
            | InternalError::Tag(TagError::EmptyName) => Self::invalid_input(err.to_string()),

            InternalError::Tag(TagError::DuplicateName { name }) => {
                tracing::debug!("Rejected duplicate tag name: {}", name);
                Self::conflict(err.to_string())
            }

            InternalError::Database(DatabaseError::ConstraintViolation { operation, .. }) => {
                tracing::warn!("Unmapped constraint violation in {}: {}", operation, err);
                Self::internal_server_error()
            }
            InternalError::Database(_) => {
                tracing::error!("Database failure: {}", err);
                Self::internal_server_error()
            }
        }
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            CatalogError::InvalidInput(json) => json.0.message.clone(),
            CatalogError::NotFound(json) => json.0.message.clone(),
            CatalogError::Conflict(json) => json.0.message.clone(),
            CatalogError::InternalError(json) => json.0.message.clone(),
        }
    }

    /// Get the HTTP status code from the error variant
    pub fn status_code(&self) -> u16 {
        match self {
            CatalogError::InvalidInput(json) => json.0.status_code,
            CatalogError::NotFound(json) => json.0.status_code,
            CatalogError::Conflict(json) => json.0.status_code,
            CatalogError::InternalError(json) => json.0.status_code,
        }
    }
}

impl From<InternalError> for CatalogError {
    fn from(err: InternalError) -> Self {
        Self::from_internal_error(err)
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
