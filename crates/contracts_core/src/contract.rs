//! Data contract document types.
//!
//! This module contains the source document model: identity, info, terms,
//! servers, models with their fields, quality rules, and service levels.
//! Every optional attribute is an `Option` (or an empty-by-default
//! collection), so presence is decided once when the document is loaded.

use crate::{ContractError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A data contract document.
///
/// `servers`, `models` and the fields of each model keep the order in which
/// they appear in the source document.
///
/// # Example
///
/// ```rust
/// use contracts_core::{DataContract, Info};
///
/// let contract = DataContract {
///     id: Some("orders-latest".to_string()),
///     info: Some(Info {
///         title: Some("Orders Latest".to_string()),
///         owner: Some("checkout-team".to_string()),
///         ..Default::default()
///     }),
///     ..Default::default()
/// };
///
/// assert_eq!(contract.info().unwrap().owner.as_deref(), Some("checkout-team"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataContract {
    /// Version of the data contract specification the document follows (e.g. "1.1.0")
    pub data_contract_specification: Option<String>,

    /// Unique identifier of the contract, also used as the product id
    pub id: Option<String>,

    /// Descriptive metadata; always present in a well-formed document
    pub info: Option<Info>,

    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Usage terms
    pub terms: Option<Terms>,

    /// Servers keyed by name
    #[serde(default)]
    pub servers: IndexMap<String, Server>,

    /// Models keyed by name
    #[serde(default)]
    pub models: IndexMap<String, Model>,

    /// Service level guarantees
    pub servicelevels: Option<ServiceLevels>,
}

impl DataContract {
    /// Returns the `info` block.
    ///
    /// # Errors
    ///
    /// Returns `ContractError::MissingField` when the document has no `info`.
    pub fn info(&self) -> Result<&Info> {
        self.info
            .as_ref()
            .ok_or_else(|| ContractError::MissingField("info".to_string()))
    }

    /// Returns the first server in document order, if any.
    pub fn first_server(&self) -> Option<(&str, &Server)> {
        self.servers
            .first()
            .map(|(name, server)| (name.as_str(), server))
    }

    /// Total number of quality rules on models and fields.
    pub fn quality_rule_count(&self) -> usize {
        self.models
            .values()
            .map(|model| {
                model.quality.len()
                    + model
                        .fields
                        .values()
                        .map(|field| field.quality.len())
                        .sum::<usize>()
            })
            .sum()
    }
}

/// Descriptive metadata of a contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    /// Human-readable title
    pub title: Option<String>,

    /// Version of the contract itself
    pub version: Option<String>,

    /// Lifecycle status (e.g. "active", "deprecated")
    pub status: Option<String>,

    /// Longer description
    pub description: Option<String>,

    /// Owning team
    pub owner: Option<String>,

    /// Name of the data product this contract belongs to
    pub data_product: Option<String>,

    /// Contact details of the owner
    pub contact: Option<Contact>,
}

/// Contact details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub url: Option<String>,
}

/// Terms of use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Terms {
    /// What the data may be used for
    pub usage: Option<String>,

    /// Restrictions on use
    pub limitations: Option<String>,

    /// Free text price, usually "<amount> <currency> <unit>"
    pub billing: Option<String>,

    /// Notice period before termination (e.g. "P3M")
    pub notice_period: Option<String>,
}

/// A server the data is available on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Server {
    /// Server type (e.g. "s3", "bigquery", "postgres")
    #[serde(rename = "type")]
    pub server_type: Option<String>,

    /// Data format (e.g. "parquet", "json")
    pub format: Option<String>,

    /// Physical location (e.g. "s3://bucket/orders/")
    pub location: Option<String>,

    /// Schema reference on the server
    pub schema: Option<String>,

    /// Endpoint URL for API style servers
    pub endpoint_url: Option<String>,

    pub description: Option<String>,
}

/// A logical model (table, topic, document type).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub description: Option<String>,

    /// Model type (e.g. "table", "view")
    #[serde(rename = "type")]
    pub model_type: Option<String>,

    /// Fields keyed by name
    #[serde(default)]
    pub fields: IndexMap<String, Field>,

    /// Model level quality rules
    #[serde(default)]
    pub quality: Vec<QualityRule>,
}

/// A field of a model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Logical type (e.g. "string", "decimal", "timestamp")
    #[serde(rename = "type")]
    pub field_type: Option<String>,

    pub description: Option<String>,

    /// Format hint (e.g. "email", "uuid")
    pub format: Option<String>,

    /// Server specific settings
    pub config: Option<FieldConfig>,

    /// Field level quality rules
    #[serde(default)]
    pub quality: Vec<QualityRule>,
}

impl Field {
    /// Physical type annotation, if any.
    pub fn physical_type(&self) -> Option<&str> {
        self.config
            .as_ref()
            .and_then(|config| config.physical_type.as_deref())
    }
}

/// Server specific settings of a field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfig {
    /// Physical column type (e.g. "VARCHAR(255)")
    #[serde(alias = "physical_type")]
    pub physical_type: Option<String>,
}

/// A quality rule attached to a model or a field.
///
/// At most one of the numeric constraints is expected to be set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityRule {
    /// Rule category (e.g. "custom", "sql", "uniqueness")
    #[serde(rename = "type")]
    pub rule_type: Option<String>,

    pub description: Option<String>,

    pub must_be: Option<Value>,

    pub must_be_greater_than: Option<Value>,

    pub must_be_greater_than_or_equal_to: Option<Value>,
}

/// Service level guarantees, one optional entry per dimension.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceLevels {
    pub availability: Option<ServiceLevel>,
    pub retention: Option<ServiceLevel>,
    pub latency: Option<ServiceLevel>,
    pub freshness: Option<ServiceLevel>,
    pub frequency: Option<ServiceLevel>,
    pub support: Option<ServiceLevel>,
    pub backup: Option<ServiceLevel>,
}

impl ServiceLevels {
    /// Returns the entry for a dimension.
    pub fn get(&self, dimension: ServiceLevelDimension) -> Option<&ServiceLevel> {
        match dimension {
            ServiceLevelDimension::Availability => self.availability.as_ref(),
            ServiceLevelDimension::Retention => self.retention.as_ref(),
            ServiceLevelDimension::Latency => self.latency.as_ref(),
            ServiceLevelDimension::Freshness => self.freshness.as_ref(),
            ServiceLevelDimension::Frequency => self.frequency.as_ref(),
            ServiceLevelDimension::Support => self.support.as_ref(),
            ServiceLevelDimension::Backup => self.backup.as_ref(),
        }
    }

    /// Iterates over the populated dimensions in their fixed order.
    pub fn populated(&self) -> impl Iterator<Item = (ServiceLevelDimension, &ServiceLevel)> {
        ServiceLevelDimension::ALL
            .into_iter()
            .filter_map(move |dimension| self.get(dimension).map(|level| (dimension, level)))
    }
}

/// One service level dimension.
///
/// Each dimension only uses a subset of the attributes: availability has a
/// `percentage`, latency and freshness a `threshold`, retention a `period`,
/// frequency and backup an `interval`, support `time` and `responseTime`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLevel {
    pub description: Option<String>,

    /// Guaranteed share of time (e.g. "99.9%")
    pub percentage: Option<Value>,

    /// Maximum delay (e.g. "25h")
    pub threshold: Option<Value>,

    /// Retention period (e.g. "P1Y")
    pub period: Option<String>,

    /// Update or backup interval (e.g. "daily")
    pub interval: Option<String>,

    /// Unit of the threshold or percentage
    pub unit: Option<String>,

    /// Support response time (e.g. "1h")
    pub response_time: Option<String>,

    /// Support time window (e.g. "business hours")
    pub time: Option<String>,

    /// Update schedule as a cron expression (e.g. "0 0 * * *").
    /// Kept from the source document, not part of the ODPS output.
    pub cron: Option<String>,

    /// Backup recovery time objective (e.g. "24 hours").
    /// Kept from the source document, not part of the ODPS output.
    pub recovery_time: Option<String>,

    /// Backup recovery point objective (e.g. "1 week").
    /// Kept from the source document, not part of the ODPS output.
    pub recovery_point: Option<String>,
}

/// The fixed service level dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceLevelDimension {
    Availability,
    Retention,
    Latency,
    Freshness,
    Frequency,
    Support,
    Backup,
}

impl ServiceLevelDimension {
    /// All dimensions, in output order.
    pub const ALL: [ServiceLevelDimension; 7] = [
        ServiceLevelDimension::Availability,
        ServiceLevelDimension::Retention,
        ServiceLevelDimension::Latency,
        ServiceLevelDimension::Freshness,
        ServiceLevelDimension::Frequency,
        ServiceLevelDimension::Support,
        ServiceLevelDimension::Backup,
    ];

    /// Lowercase key as used in documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceLevelDimension::Availability => "availability",
            ServiceLevelDimension::Retention => "retention",
            ServiceLevelDimension::Latency => "latency",
            ServiceLevelDimension::Freshness => "freshness",
            ServiceLevelDimension::Frequency => "frequency",
            ServiceLevelDimension::Support => "support",
            ServiceLevelDimension::Backup => "backup",
        }
    }
}

impl fmt::Display for ServiceLevelDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_missing_info_is_reported() {
        let contract = DataContract::default();
        let err = contract.info().unwrap_err();
        assert!(matches!(err, ContractError::MissingField(ref f) if f == "info"));
        assert_eq!(err.to_string(), "Missing required field: info");
    }

    #[test]
    fn test_first_server_follows_insertion_order() {
        let mut contract = DataContract::default();
        contract.servers.insert(
            "production".to_string(),
            Server {
                server_type: Some("s3".to_string()),
                ..Default::default()
            },
        );
        contract.servers.insert(
            "development".to_string(),
            Server {
                server_type: Some("local".to_string()),
                ..Default::default()
            },
        );

        let (name, server) = contract.first_server().expect("server expected");
        assert_eq!(name, "production");
        assert_eq!(server.server_type.as_deref(), Some("s3"));
    }

    #[test]
    fn test_populated_dimensions_keep_fixed_order() {
        let levels = ServiceLevels {
            backup: Some(ServiceLevel::default()),
            availability: Some(ServiceLevel::default()),
            support: Some(ServiceLevel::default()),
            ..Default::default()
        };

        let dims: Vec<_> = levels.populated().map(|(d, _)| d.as_str()).collect();
        assert_eq!(dims, vec!["availability", "support", "backup"]);
    }

    #[test]
    fn test_deserialize_camel_case_keys() {
        let contract: DataContract = serde_json::from_value(json!({
            "dataContractSpecification": "1.1.0",
            "id": "orders",
            "info": { "title": "Orders", "dataProduct": "Checkout" },
            "terms": { "noticePeriod": "P3M" },
            "servers": { "prod": { "type": "s3", "endpointUrl": "https://api" } },
            "models": {
                "orders": {
                    "fields": {
                        "id": {
                            "type": "string",
                            "config": { "physical_type": "VARCHAR(36)" },
                            "quality": [{ "type": "uniqueness", "mustBeGreaterThanOrEqualTo": 1 }]
                        }
                    }
                }
            },
            "servicelevels": { "support": { "responseTime": "1h" } }
        }))
        .expect("valid contract");

        assert_eq!(contract.data_contract_specification.as_deref(), Some("1.1.0"));
        assert_eq!(
            contract.info().unwrap().data_product.as_deref(),
            Some("Checkout")
        );
        assert_eq!(
            contract.terms.as_ref().unwrap().notice_period.as_deref(),
            Some("P3M")
        );
        assert_eq!(
            contract.servers["prod"].endpoint_url.as_deref(),
            Some("https://api")
        );

        let field = &contract.models["orders"].fields["id"];
        assert_eq!(field.physical_type(), Some("VARCHAR(36)"));
        assert_eq!(
            field.quality[0].must_be_greater_than_or_equal_to,
            Some(json!(1))
        );
        assert_eq!(contract.quality_rule_count(), 1);
        assert_eq!(
            contract
                .servicelevels
                .as_ref()
                .unwrap()
                .support
                .as_ref()
                .unwrap()
                .response_time
                .as_deref(),
            Some("1h")
        );
    }

    #[test]
    fn test_field_without_type_deserializes() {
        let field: Field = serde_json::from_value(json!({ "description": "untyped" }))
            .expect("type is optional");
        assert_eq!(field.field_type, None);
        assert!(field.quality.is_empty());
        assert_eq!(field.physical_type(), None);
    }

    #[test]
    fn test_backup_schedule_attributes_deserialize() {
        let levels: ServiceLevels = serde_json::from_value(json!({
            "backup": {
                "interval": "weekly",
                "cron": "0 0 * * 0",
                "recoveryTime": "24 hours",
                "recoveryPoint": "1 week"
            }
        }))
        .expect("backup attributes are known");

        let backup = levels.get(ServiceLevelDimension::Backup).unwrap();
        assert_eq!(backup.interval.as_deref(), Some("weekly"));
        assert_eq!(backup.cron.as_deref(), Some("0 0 * * 0"));
        assert_eq!(backup.recovery_time.as_deref(), Some("24 hours"));
        assert_eq!(backup.recovery_point.as_deref(), Some("1 week"));
    }
}
