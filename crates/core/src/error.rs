//! Inventory error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the inventory layers.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory-level error.
///
/// Every variant is non-fatal: operations return it to the caller and leave the
/// inventory exactly as it was before the call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// Construction or decoding received invalid, missing or malformed fields.
    #[error("invalid product data: {0}")]
    InvalidProductData(String),

    /// A product with this ID is already present.
    #[error("product ID already exists: {0}")]
    DuplicateProductId(ProductId),

    /// No product with this ID is present.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    /// A sale asked for more units than are in stock.
    #[error("insufficient stock for {product_id}: requested {requested}, only {available} left")]
    InsufficientStock {
        product_id: ProductId,
        requested: u64,
        available: u64,
    },

    /// A quantity or amount argument was not strictly positive.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// Reading or writing the inventory file failed.
    #[error("persistence error ({path}): {reason}")]
    Persistence { path: String, reason: String },
}

/// Category of an [`InventoryError`], without its payload.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidProductData,
    DuplicateProductId,
    ProductNotFound,
    InsufficientStock,
    InvalidOperation,
    Persistence,
}

impl InventoryError {
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidProductData(msg.into())
    }

    pub fn invalid_operation(msg: impl Into<String>) -> Self {
        Self::InvalidOperation(msg.into())
    }

    pub fn duplicate(id: ProductId) -> Self {
        Self::DuplicateProductId(id)
    }

    pub fn not_found(id: ProductId) -> Self {
        Self::ProductNotFound(id)
    }

    pub fn persistence(path: impl AsRef<std::path::Path>, reason: impl core::fmt::Display) -> Self {
        Self::Persistence {
            path: path.as_ref().display().to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidProductData(_) => ErrorKind::InvalidProductData,
            Self::DuplicateProductId(_) => ErrorKind::DuplicateProductId,
            Self::ProductNotFound(_) => ErrorKind::ProductNotFound,
            Self::InsufficientStock { .. } => ErrorKind::InsufficientStock,
            Self::InvalidOperation(_) => ErrorKind::InvalidOperation,
            Self::Persistence { .. } => ErrorKind::Persistence,
        }
    }
}
