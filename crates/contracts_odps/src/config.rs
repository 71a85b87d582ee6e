//! Configuration for encoding exported documents.

use crate::ExportError;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Text format of the exported document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// YAML, the native ODPS format
    #[default]
    Yaml,
    /// JSON
    Json,
}

impl OutputFormat {
    /// Infers the format from a file extension, if it is a known one.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl FromStr for OutputFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            other => Err(ExportError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Yaml => f.write_str("yaml"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Settings for encoding an exported document.
///
/// # Example
///
/// ```rust
/// use contracts_odps::{ExportConfig, OutputFormat};
///
/// let config = ExportConfig::builder()
///     .format(OutputFormat::Json)
///     .compact()
///     .build()
///     .unwrap();
///
/// assert_eq!(config.format, OutputFormat::Json);
/// assert!(!config.pretty);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Output text format
    pub format: OutputFormat,

    /// Indent JSON output (YAML is always block style)
    pub pretty: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Yaml,
            pretty: true,
        }
    }
}

impl ExportConfig {
    /// Creates a configuration with default settings (pretty YAML).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets whether JSON output is indented.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Creates a new builder for `ExportConfig`.
    pub fn builder() -> ExportConfigBuilder {
        ExportConfigBuilder::default()
    }

    /// Validates the configuration.
    ///
    /// YAML is always written in block style, so compact output is only
    /// accepted for JSON.
    pub fn validate(&self) -> Result<(), ExportError> {
        if !self.pretty && self.format == OutputFormat::Yaml {
            return Err(ExportError::ConfigurationError(
                "compact output is only supported for json".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for `ExportConfig`.
#[derive(Debug, Clone, Default)]
pub struct ExportConfigBuilder {
    format: Option<OutputFormat>,
    pretty: Option<bool>,
}

impl ExportConfigBuilder {
    /// Sets the output format.
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Sets the output format from its name (`yaml`, `yml` or `json`).
    pub fn format_name(mut self, name: &str) -> Result<Self, ExportError> {
        self.format = Some(name.parse()?);
        Ok(self)
    }

    /// Sets whether JSON output is indented.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = Some(pretty);
        self
    }

    /// Writes JSON on a single line.
    pub fn compact(self) -> Self {
        self.pretty(false)
    }

    /// Builds the `ExportConfig`.
    ///
    /// Unset options take their defaults. Returns an error if the resulting
    /// configuration is invalid.
    pub fn build(self) -> Result<ExportConfig, ExportError> {
        let defaults = ExportConfig::default();
        let config = ExportConfig {
            format: self.format.unwrap_or(defaults.format),
            pretty: self.pretty.unwrap_or(defaults.pretty),
        };

        config.validate()?;
        Ok(config)
    }
}
