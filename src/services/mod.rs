// Services layer - Business logic and orchestration
pub mod item_service;
pub mod tag_service;

pub use item_service::{CreateItemInput, ItemService};
pub use tag_service::TagService;

use crate::errors::InternalError;
use crate::errors::internal::DatabaseError;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

async fn begin_transaction(db: &DatabaseConnection) -> Result<DatabaseTransaction, InternalError> {
    db.begin()
        .await
        .map_err(|source| DatabaseError::TransactionBegin { source }.into())
}

async fn commit_transaction(txn: DatabaseTransaction) -> Result<(), InternalError> {
    txn.commit()
        .await
        .map_err(|source| DatabaseError::TransactionCommit { source }.into())
}
