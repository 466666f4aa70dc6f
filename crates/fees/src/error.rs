//! Universal error types for the fee engine.

use thiserror::Error;

/// Top-level error type for all fee-engine operations.
#[derive(Debug, Error)]
pub enum FeeError {
    #[error("Invalid subtotal {0}: must be a finite, non-negative dollar amount")]
    InvalidSubtotal(f64),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type FeeResult<T> = Result<T, FeeError>;
