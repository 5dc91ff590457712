//! Error types for product domain validation and parsing.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors returned while constructing product domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProductDomainError {
    /// The product name is empty after trimming.
    #[error("product name must not be empty")]
    EmptyProductName,

    /// The price is below zero.
    #[error("product price must not be negative, got {0}")]
    NegativePrice(Decimal),

    /// The price carries more than two decimal places.
    #[error("product price must have at most two decimal places, got {0}")]
    PriceScale(Decimal),

    /// The price does not fit the stored precision.
    #[error("product price must be below 10000000000, got {0}")]
    PriceOutOfRange(Decimal),

    /// The status tag is empty after trimming.
    #[error("product status must not be empty")]
    EmptyStatus,
}

/// Error returned while parsing approval actions from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown approval action: {0}")]
pub struct ParseApprovalActionError(pub String);
