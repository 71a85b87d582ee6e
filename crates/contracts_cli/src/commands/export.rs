use anyhow::{Context, Result};
use contracts_odps::{ExportConfig, OutputFormat, export, export_to_path};
use contracts_parser::parse_file;
use std::path::Path;
use tracing::{debug, info};

use crate::output;

pub fn execute(
    contract_path: &str,
    format: Option<&str>,
    output_path: Option<&str>,
    compact: bool,
) -> Result<()> {
    info!("Exporting contract to ODPS: {}", contract_path);

    let contract = parse_file(Path::new(contract_path))
        .with_context(|| format!("Failed to parse contract file: {}", contract_path))?;

    let format = resolve_format(format, output_path)?;
    debug!("Output format: {}", format);

    let config = ExportConfig::builder()
        .format(format)
        .pretty(!compact)
        .build()?;

    // Output to file or stdout
    if let Some(path) = output_path {
        export_to_path(&contract, &config, Path::new(path))
            .with_context(|| format!("Failed to export contract to file: {}", path))?;
        output::print_success(&format!("ODPS document written to: {}", path));
        return Ok(());
    }

    let document = export(&contract, &config)
        .with_context(|| format!("Failed to export contract: {}", contract_path))?;

    if document.ends_with('\n') {
        print!("{}", document);
    } else {
        println!("{}", document);
    }

    Ok(())
}

/// An explicit format wins, then the output file extension, then YAML.
fn resolve_format(format: Option<&str>, output_path: Option<&str>) -> Result<OutputFormat> {
    match (format, output_path) {
        (Some(format), _) => Ok(format.parse()?),
        (None, Some(path)) => Ok(OutputFormat::from_path(Path::new(path)).unwrap_or_default()),
        (None, None) => Ok(OutputFormat::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resolve_format() {
        assert_eq!(resolve_format(None, None).unwrap(), OutputFormat::Yaml);
        assert_eq!(
            resolve_format(None, Some("product.json")).unwrap(),
            OutputFormat::Json
        );
        assert_eq!(
            resolve_format(None, Some("product.txt")).unwrap(),
            OutputFormat::Yaml
        );
        assert_eq!(
            resolve_format(Some("yaml"), Some("product.json")).unwrap(),
            OutputFormat::Yaml
        );
        assert!(resolve_format(Some("xml"), None).is_err());
    }
}
