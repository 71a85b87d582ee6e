//! Loader for data contract documents (YAML/TOML/JSON formats).
//!
//! This module provides functionality to parse data contract documents into
//! the strongly-typed `DataContract` structure. Servers, models and fields
//! keep the order in which they appear in the file.
//!
//! # Example
//!
//! ```rust
//! use contracts_parser::parse_yaml;
//!
//! let yaml = r#"
//! dataContractSpecification: 1.1.0
//! id: orders-latest
//! info:
//!   title: Orders Latest
//!   version: 2.0.0
//!   owner: checkout-team
//! models:
//!   orders:
//!     fields:
//!       order_id:
//!         type: string
//! "#;
//!
//! let contract = parse_yaml(yaml).expect("Failed to parse contract");
//! assert_eq!(contract.id.as_deref(), Some("orders-latest"));
//! ```

use contracts_core::DataContract;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during contract parsing.
#[derive(Debug, Error)]
pub enum ParserError {
    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// JSON parsing or deserialization failed
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported contract file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
    /// JSON format (.json)
    Json,
}

/// Parse a contract from a YAML string.
///
/// # Example
///
/// ```rust
/// use contracts_parser::parse_yaml;
///
/// let yaml = r#"
/// id: my_dataset
/// info:
///   title: My dataset
/// "#;
///
/// let contract = parse_yaml(yaml).unwrap();
/// assert_eq!(contract.id.as_deref(), Some("my_dataset"));
/// ```
pub fn parse_yaml(content: &str) -> Result<DataContract> {
    let contract: DataContract = serde_yaml_ng::from_str(content)?;
    Ok(contract)
}

/// Parse a contract from a TOML string.
///
/// # Example
///
/// ```rust
/// use contracts_parser::parse_toml;
///
/// let toml = r#"
/// id = "my_dataset"
///
/// [info]
/// title = "My dataset"
/// owner = "data-team"
/// "#;
///
/// let contract = parse_toml(toml).unwrap();
/// assert_eq!(contract.info.unwrap().owner.as_deref(), Some("data-team"));
/// ```
pub fn parse_toml(content: &str) -> Result<DataContract> {
    let contract: DataContract =
        toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?;
    Ok(contract)
}

/// Parse a contract from a JSON string.
pub fn parse_json(content: &str) -> Result<DataContract> {
    let contract: DataContract = serde_json::from_str(content)?;
    Ok(contract)
}

/// Detect the contract format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.yaml`, `.yml` → `ContractFormat::Yaml`
/// * `.toml` → `ContractFormat::Toml`
/// * `.json` → `ContractFormat::Json`
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<ContractFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(ContractFormat::Yaml),
        "toml" => Ok(ContractFormat::Toml),
        "json" => Ok(ContractFormat::Json),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a contract from a file with automatic format detection.
///
/// # Example
///
/// ```no_run
/// use contracts_parser::parse_file;
/// use std::path::Path;
///
/// let contract = parse_file(Path::new("contracts/orders.yml")).unwrap();
/// println!("Loaded contract: {:?}", contract.id);
/// ```
pub fn parse_file(path: &Path) -> Result<DataContract> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;

    match format {
        ContractFormat::Yaml => parse_yaml(&content),
        ContractFormat::Toml => parse_toml(&content),
        ContractFormat::Json => parse_json(&content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_parse_valid_yaml_minimal() {
        let yaml = r#"
id: test_contract
info:
  title: Test
"#;

        let contract = parse_yaml(yaml).expect("Failed to parse valid YAML");

        assert_eq!(contract.id.as_deref(), Some("test_contract"));
        assert_eq!(contract.info.unwrap().title.as_deref(), Some("Test"));
        assert!(contract.tags.is_empty());
        assert!(contract.servers.is_empty());
        assert!(contract.models.is_empty());
        assert!(contract.terms.is_none());
        assert!(contract.servicelevels.is_none());
    }

    #[test]
    fn test_parse_yaml_without_info() {
        let contract = parse_yaml("id: orphan\n").expect("info is checked by consumers");
        assert!(contract.info.is_none());
    }

    #[test]
    fn test_parse_yaml_keeps_document_order() {
        let yaml = r#"
servers:
  staging:
    type: postgres
  production:
    type: s3
models:
  zeta:
    fields:
      second:
        type: int
      first:
        type: string
  alpha:
    description: Comes second
"#;

        let contract = parse_yaml(yaml).expect("Failed to parse YAML");

        let servers: Vec<_> = contract.servers.keys().map(String::as_str).collect();
        assert_eq!(servers, vec!["staging", "production"]);

        let models: Vec<_> = contract.models.keys().map(String::as_str).collect();
        assert_eq!(models, vec!["zeta", "alpha"]);

        let fields: Vec<_> = contract.models["zeta"]
            .fields
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(fields, vec!["second", "first"]);
    }

    #[test]
    fn test_parse_yaml_with_quality_and_servicelevels() {
        let yaml = r#"
id: orders
models:
  orders:
    quality:
      - type: row_count
        mustBeGreaterThan: 1000
    fields:
      order_id:
        type: string
        config:
          physicalType: VARCHAR(36)
        quality:
          - type: uniqueness
            description: No duplicates
            mustBe: 0
servicelevels:
  availability:
    percentage: 99.9%
  latency:
    threshold: 25h
  frequency:
    interval: daily
"#;

        let contract = parse_yaml(yaml).expect("Failed to parse YAML");

        let model = &contract.models["orders"];
        assert_eq!(model.quality[0].must_be_greater_than, Some(json!(1000)));

        let field = &model.fields["order_id"];
        assert_eq!(field.physical_type(), Some("VARCHAR(36)"));
        assert_eq!(field.quality[0].rule_type.as_deref(), Some("uniqueness"));
        assert_eq!(field.quality[0].must_be, Some(json!(0)));

        let levels = contract.servicelevels.expect("servicelevels present");
        assert_eq!(
            levels.availability.unwrap().percentage,
            Some(json!("99.9%"))
        );
        assert_eq!(levels.latency.unwrap().threshold, Some(json!("25h")));
        assert_eq!(levels.frequency.unwrap().interval.as_deref(), Some("daily"));
        assert!(levels.backup.is_none());
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let invalid_yaml = r#"
id: test
info:
  title: [unterminated
"#;

        let result = parse_yaml(invalid_yaml);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ParserError::YamlError(_)));
    }

    #[test]
    fn test_parse_yaml_wrong_shape() {
        let yaml = r#"
id: test
tags: not-a-list
"#;

        assert!(parse_yaml(yaml).is_err());
    }

    #[test]
    fn test_parse_toml_keeps_document_order() {
        let toml = r#"
id = "orders"

[info]
title = "Orders"

[models.zeta.fields.second]
type = "int"

[models.zeta.fields.first]
type = "string"

[models.alpha]
description = "Comes second"
"#;

        let contract = parse_toml(toml).expect("Failed to parse TOML");

        let models: Vec<_> = contract.models.keys().map(String::as_str).collect();
        assert_eq!(models, vec!["zeta", "alpha"]);

        let fields: Vec<_> = contract.models["zeta"]
            .fields
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(fields, vec!["second", "first"]);
    }

    #[test]
    fn test_parse_invalid_toml() {
        let invalid_toml = r#"
id = "test"
[[[invalid syntax
"#;

        let result = parse_toml(invalid_toml);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ParserError::TomlError(_)));
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{"id": "orders", "info": {"title": "Orders"}, "tags": ["a", "b"]}"#;

        let contract = parse_json(json).expect("Failed to parse JSON");
        assert_eq!(contract.tags, vec!["a", "b"]);
        assert!(matches!(
            parse_json("{not json").unwrap_err(),
            ParserError::JsonError(_)
        ));
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(
            detect_format(Path::new("contract.yaml")).unwrap(),
            ContractFormat::Yaml
        );
        assert_eq!(
            detect_format(Path::new("contract.YML")).unwrap(),
            ContractFormat::Yaml
        );
        assert_eq!(
            detect_format(Path::new("contract.toml")).unwrap(),
            ContractFormat::Toml
        );
        assert_eq!(
            detect_format(Path::new("contract.json")).unwrap(),
            ContractFormat::Json
        );
    }

    #[test]
    fn test_detect_format_unsupported() {
        let result = detect_format(Path::new("contract.xml"));
        assert!(matches!(
            result.unwrap_err(),
            ParserError::UnsupportedFormat(ext) if ext == "xml"
        ));
    }

    #[test]
    fn test_detect_format_no_extension() {
        let result = detect_format(Path::new("contract"));
        assert!(matches!(result.unwrap_err(), ParserError::InvalidExtension));
    }

    #[test]
    fn test_parse_file_missing() {
        let result = parse_file(Path::new("does/not/exist.yml"));
        assert!(matches!(result.unwrap_err(), ParserError::IoError(_)));
    }

    #[test]
    fn test_parse_file_yaml() {
        // Shared with the CLI tests
        let path = Path::new("../contracts_cli/tests/fixtures/orders_contract.yml");

        // Only run if the file exists
        if path.exists() {
            let contract = parse_file(path).expect("Failed to parse fixture YAML file");

            assert_eq!(contract.id.as_deref(), Some("orders-latest"));
            assert_eq!(contract.models.len(), 2);
            assert!(contract.servicelevels.is_some());
        }
    }
}
