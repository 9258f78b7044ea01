#[cfg(test)]
mod tests {
    use crate::errors::internal::{DatabaseError, InternalError, ItemError, TagError};
    use sea_orm::DbErr;

    #[test]
    fn test_database_helper_wraps_operation() {
        let err = InternalError::database("find_tag_by_name", DbErr::Custom("boom".to_string()));

        assert!(matches!(
            err,
            InternalError::Database(DatabaseError::Operation { ref operation, .. }) if operation == "find_tag_by_name"
        ));
        assert!(!err.is_constraint_violation());
        assert!(err.to_string().contains("find_tag_by_name failed"));
    }

    #[test]
    fn test_domain_errors_are_transparent() {
        let err: InternalError = TagError::DuplicateName { name: "vip".to_string() }.into();
        assert_eq!(err.to_string(), "Tag already exists: vip");

        let err: InternalError = ItemError::ItemNotFound { item_id: 3 }.into();
        assert_eq!(err.to_string(), "Item not found: 3");
    }

    #[test]
    fn test_invalid_price_message_includes_value() {
        let err = ItemError::InvalidPrice { price: -2.5 };
        assert_eq!(err.to_string(), "Item price must be a non-negative number, got -2.5");
    }
}
