//! Error types for data contracts.
//!
//! Absent optional attributes are never errors. Only structural parts a
//! well-formed document always carries are reported here.

use thiserror::Error;

/// Result type for data contract operations.
pub type Result<T> = std::result::Result<T, ContractError>;

/// Main error type for data contract operations.
#[derive(Error, Debug)]
pub enum ContractError {
    /// Missing required field
    #[error("Missing required field: {0}")]
    MissingField(String),
}
