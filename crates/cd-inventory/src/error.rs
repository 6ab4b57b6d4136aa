use thiserror::Error;

/// CdInventory Error type
#[derive(Debug, Error)]
pub enum CdInventoryError {
    #[error("Storage error: {0}")]
    Storage(#[from] crate::storage::StorageError),
    #[error("Table error: {0}")]
    Table(#[from] crate::inventory::TableError),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// CdInventory Result type
pub type CdInventoryResult<T> = Result<T, CdInventoryError>;
