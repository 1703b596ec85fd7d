//! Domain error model.

use thiserror::Error;

use crate::id::Sku;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic allocation failures. Callers that load
/// batches from storage or expose them over a transport wrap this in their own
/// error types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No candidate batch could take the requested order line.
    #[error("out of stock for sku {sku}")]
    OutOfStock { sku: Sku },

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn out_of_stock(sku: impl Into<Sku>) -> Self {
        Self::OutOfStock { sku: sku.into() }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// The SKU carried by an out-of-stock failure.
    pub fn sku(&self) -> Option<&Sku> {
        match self {
            DomainError::OutOfStock { sku } => Some(sku),
            DomainError::InvalidId(_) => None,
        }
    }
}
