//! Error types for export operations.

use contracts_core::ContractError;
use thiserror::Error;

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors that can occur while exporting a contract.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The source contract is structurally incomplete
    #[error("Invalid data contract: {0}")]
    Contract(#[from] ContractError),

    /// YAML encoding failed
    #[error("Failed to encode YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON encoding failed
    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Unknown output format
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// Inconsistent export settings
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Writing the document failed
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
