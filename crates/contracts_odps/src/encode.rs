//! Text encoding of ODPS documents.
//!
//! Keys are written in struct declaration order and non-ASCII text is kept
//! as is. Logging for an export happens here, around the mapper.

use crate::{ExportConfig, OdpsDocument, OutputFormat, Result, to_odps};
use contracts_core::DataContract;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Encodes a document as YAML or JSON.
///
/// # Errors
///
/// Returns `ExportError::ConfigurationError` when `config` does not validate.
pub fn encode(document: &OdpsDocument, config: &ExportConfig) -> Result<String> {
    config.validate()?;

    let output = match config.format {
        OutputFormat::Yaml => serde_yaml_ng::to_string(document)?,
        OutputFormat::Json if config.pretty => serde_json::to_string_pretty(document)?,
        OutputFormat::Json => serde_json::to_string(document)?,
    };

    debug!("Encoded {} bytes of {}", output.len(), config.format);
    Ok(output)
}

/// Maps a contract to ODPS and encodes the result.
///
/// # Example
///
/// ```rust
/// use contracts_core::DataContractBuilder;
/// use contracts_odps::{export, ExportConfig};
///
/// let contract = DataContractBuilder::new("orders").title("Orders").build();
/// let yaml = export(&contract, &ExportConfig::new()).unwrap();
///
/// assert!(yaml.starts_with("schema: https://opendataproducts.org/v3.0/schema/odps.yaml"));
/// ```
pub fn export(contract: &DataContract, config: &ExportConfig) -> Result<String> {
    info!(
        "Exporting data contract {} to ODPS",
        contract.id.as_deref().unwrap_or("(no id)")
    );
    debug!(
        "Contract has {} models, {} quality rules, {} servers",
        contract.models.len(),
        contract.quality_rule_count(),
        contract.servers.len()
    );

    let document = to_odps(contract)?;

    debug!(
        "Mapped {} quality declarations and {} SLA declarations",
        document.product.data_quality.declarative.len(),
        document.product.sla.declarative.len()
    );

    encode(&document, config)
}

/// Exports a contract and writes the encoded document to `path`.
///
/// The file always ends with a newline.
pub fn export_to_path(contract: &DataContract, config: &ExportConfig, path: &Path) -> Result<()> {
    let mut output = export(contract, config)?;
    if !output.ends_with('\n') {
        output.push('\n');
    }

    fs::write(path, &output)?;
    info!("Wrote ODPS document to {}", path.display());
    Ok(())
}
