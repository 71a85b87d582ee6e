//! Open Data Product Specification (ODPS) document types.
//!
//! The structs serialize in declaration order, which is the key order of the
//! encoded document. Absent values serialize as `null` so the shape of the
//! document does not depend on how complete the source contract is.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Schema reference embedded at the top of every exported document.
pub const ODPS_SCHEMA_URL: &str = "https://opendataproducts.org/v3.0/schema/odps.yaml";

/// ODPS version the exporter targets.
pub const ODPS_VERSION: &str = "3.0";

/// An ODPS document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OdpsDocument {
    /// Schema reference URL
    pub schema: String,

    /// ODPS version
    pub version: String,

    /// The data product
    pub product: Product,
}

/// The `product` section of an ODPS document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub details: Localized<ProductDetails>,

    /// Logical models of the product, one per contract model
    pub data_models: Vec<DataModel>,

    pub data_quality: Declarative,

    pub pricing_plans: Localized<Vec<PricingPlan>>,

    pub license: Localized<License>,

    #[serde(rename = "SLA")]
    pub sla: Declarative,

    pub data_access: DataAccess,

    pub data_holder: Localized<DataHolder>,

    pub support: Localized<Support>,

    pub recommended_data_products: Vec<String>,
}

/// A section keyed by language. Only English is produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Localized<T> {
    pub en: T,
}

impl<T> Localized<T> {
    /// Wraps an English section.
    pub fn en(value: T) -> Self {
        Self { en: value }
    }
}

/// A list of declarative entries (data quality, SLA).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Declarative {
    pub declarative: Vec<Declaration>,
}

/// One data quality or SLA declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    pub dimension: String,

    #[serde(rename = "displaytitle")]
    pub display_title: String,

    pub objective: Option<Value>,

    pub unit: Option<String>,

    pub description: Option<String>,
}

/// Product details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetails {
    pub name: Option<String>,

    #[serde(rename = "productID")]
    pub product_id: Option<String>,

    pub value_proposition: Option<String>,

    pub description: Option<String>,

    /// No counterpart in a data contract, always `null`
    pub visibility: Option<String>,

    pub status: Option<String>,

    pub version: Option<String>,

    /// Data contract specification version the product was exported from
    pub contract_specification: Option<String>,

    pub tags: Vec<String>,

    pub metadata: DetailsMetadata,
}

/// Additional product metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailsMetadata {
    pub team: Team,
}

/// The team owning the product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub owner: Option<String>,
}

/// A logical model of the product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataModel {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<DataModelField>,
}

/// A field of a logical model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataModelField {
    pub name: String,

    pub description: Option<String>,

    #[serde(rename = "type")]
    pub field_type: Option<String>,

    pub physical_type: Option<String>,

    pub format: Option<String>,
}

/// A pricing plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPlan {
    pub name: Option<String>,
    pub price_currency: Option<String>,
    pub price: Option<String>,
    pub unit: Option<String>,
}

/// License terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
    pub scope: LicenseScope,
    pub termination: LicenseTermination,
    pub governance: LicenseGovernance,
}

/// What the license grants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseScope {
    pub definition: Option<String>,
    pub restrictions: Option<String>,
    pub geographical_area: Option<Vec<String>>,
    pub permanent: Option<bool>,
    pub exclusive: Option<bool>,
    pub rights: Option<Vec<String>>,
}

/// How the license ends.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseTermination {
    pub reseller_transfer_allowed: Option<bool>,
    pub continuity_conditions: Option<String>,
    pub termination_notice_period: Option<String>,
}

/// Governance clauses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseGovernance {
    pub ownership: Option<String>,
    pub sublicensing: Option<String>,
    pub damages: Option<String>,
    pub confidentiality: Option<String>,
    pub applicable_laws: Option<String>,
    pub warranties: Option<String>,
    pub audits: Option<String>,
    pub force_majeure: Option<String>,
}

/// How to access the data. Serializes to `{}` when there is no access point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataAccess {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<AccessPoint>,
}

/// A single access point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessPoint {
    pub name: Option<String>,

    #[serde(rename = "type")]
    pub access_type: Option<String>,

    pub format: Option<String>,

    pub specification: Option<String>,

    #[serde(rename = "documentationURL")]
    pub documentation_url: Option<String>,

    pub description: Option<String>,
}

/// Who holds the data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataHolder {
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "URL")]
    pub url: Option<String>,
}

/// Support channels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Support {
    pub email: Option<String>,
    pub url: Option<String>,
    pub service_hours: Option<String>,
    pub response_time: Option<String>,
}
