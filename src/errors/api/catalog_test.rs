#[cfg(test)]
mod tests {
    use crate::errors::CatalogError;
    use crate::errors::internal::{DatabaseError, InternalError, ItemError, TagError};
    use sea_orm::DbErr;

    #[test]
    fn test_database_error_converts_to_internal_server_error() {
        let db_err = DbErr::Conn(sea_orm::RuntimeErr::Internal("connection refused".to_string()));
        let internal_err = InternalError::database("list_items", db_err);
        let api_err = CatalogError::from_internal_error(internal_err);

        assert_eq!(api_err.status_code(), 500);
        assert_eq!(api_err.message(), "An internal error occurred");
    }

    #[test]
    fn test_transaction_error_converts_to_internal_server_error() {
        let internal_err = InternalError::Database(DatabaseError::TransactionCommit {
            source: DbErr::RecordNotUpdated,
        });
        let api_err = CatalogError::from_internal_error(internal_err);

        assert_eq!(api_err.status_code(), 500);
    }

    #[test]
    fn test_item_not_found_converts_to_404() {
        let internal_err = InternalError::Item(ItemError::ItemNotFound { item_id: 42 });
        let api_err = CatalogError::from_internal_error(internal_err);

        assert_eq!(api_err.status_code(), 404);
        assert_eq!(api_err.message(), "Item not found: 42");
    }

    #[test]
    fn test_tag_not_found_converts_to_404() {
        let internal_err = InternalError::Tag(TagError::TagNotFound { tag_id: 7 });
        let api_err = CatalogError::from_internal_error(internal_err);

        assert_eq!(api_err.status_code(), 404);
        assert!(matches!(api_err, CatalogError::NotFound(_)));
    }

    #[test]
    fn test_duplicate_tag_converts_to_409() {
        let internal_err = InternalError::Tag(TagError::DuplicateName {
            name: "vip".to_string(),
        });
        let api_err = CatalogError::from_internal_error(internal_err);

        assert_eq!(api_err.status_code(), 409);
        assert_eq!(api_err.message(), "Tag already exists: vip");
    }

    #[test]
    fn test_validation_errors_convert_to_400() {
        let cases = vec![
            InternalError::Item(ItemError::InvalidName),
            InternalError::Item(ItemError::InvalidPrice { price: -1.0 }),
            InternalError::Tag(TagError::EmptyName),
        ];

        for internal_err in cases {
            let api_err = CatalogError::from_internal_error(internal_err);
            assert_eq!(api_err.status_code(), 400);
        }
    }

    #[test]
    fn test_display_uses_message() {
        let api_err = CatalogError::conflict("Tag already exists: gold");
        assert_eq!(api_err.to_string(), "Tag already exists: gold");
    }
}
