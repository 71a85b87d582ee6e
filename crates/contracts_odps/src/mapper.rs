//! Data contract to ODPS mapping.
//!
//! `to_odps` is a pure function of the contract: it only reads the source
//! and allocates a new document, so it can run concurrently on distinct
//! contracts. Each section of the product is built by its own projection.

use crate::{
    AccessPoint, DataAccess, DataHolder, DataModel, DataModelField, Declaration, Declarative,
    DetailsMetadata, License, LicenseGovernance, LicenseScope, LicenseTermination, Localized,
    ODPS_SCHEMA_URL, ODPS_VERSION, OdpsDocument, PricingPlan, Product, ProductDetails, Support,
    Team, parse_billing,
};
use contracts_core::{
    DataContract, Info, Model, QualityRule, Result, ServiceLevelDimension, ServiceLevels, Terms,
};
use serde_json::Value;

/// Field name used in display titles of model level quality rules.
const MODEL_LEVEL_FIELD: &str = "*";

/// Dimension of quality rules without a type.
const DEFAULT_QUALITY_DIMENSION: &str = "custom";

/// Unit of quality objectives taken from numeric constraints.
const NUMERIC_UNIT: &str = "number";

/// Converts a data contract into an ODPS document.
///
/// Every section of the product is present in the result. Missing optional
/// parts of the contract become `null` values or empty lists.
///
/// # Errors
///
/// Returns `ContractError::MissingField` when the contract has no `info`.
///
/// # Example
///
/// ```rust
/// use contracts_core::DataContractBuilder;
/// use contracts_odps::{to_odps, ODPS_VERSION};
///
/// let contract = DataContractBuilder::new("orders").title("Orders").build();
/// let document = to_odps(&contract).unwrap();
///
/// assert_eq!(document.version, ODPS_VERSION);
/// assert_eq!(document.product.details.en.name.as_deref(), Some("Orders"));
/// ```
pub fn to_odps(contract: &DataContract) -> Result<OdpsDocument> {
    let info = contract.info()?;
    let terms = contract.terms.as_ref();
    let service_levels = contract.servicelevels.as_ref();

    Ok(OdpsDocument {
        schema: ODPS_SCHEMA_URL.to_string(),
        version: ODPS_VERSION.to_string(),
        product: Product {
            details: Localized::en(project_details(contract, info)),
            data_models: project_data_models(contract),
            data_quality: Declarative {
                declarative: project_quality(contract),
            },
            pricing_plans: Localized::en(project_pricing(terms)),
            license: Localized::en(project_license(terms, info)),
            sla: Declarative {
                declarative: project_service_levels(service_levels),
            },
            data_access: project_data_access(contract),
            data_holder: Localized::en(project_data_holder(info)),
            support: Localized::en(project_support(info, service_levels)),
            recommended_data_products: Vec::new(),
        },
    })
}

fn project_details(contract: &DataContract, info: &Info) -> ProductDetails {
    ProductDetails {
        name: product_name(info).map(str::to_string),
        product_id: contract.id.clone(),
        value_proposition: contract.terms.as_ref().and_then(|t| t.usage.clone()),
        description: info.description.clone(),
        visibility: None,
        status: info.status.clone(),
        version: info.version.clone(),
        contract_specification: contract.data_contract_specification.clone(),
        tags: contract.tags.clone(),
        metadata: DetailsMetadata {
            team: Team {
                owner: info.owner.clone(),
            },
        },
    }
}

/// The title, or the data product name when the title is empty.
fn product_name(info: &Info) -> Option<&str> {
    info.title
        .as_deref()
        .filter(|title| !title.is_empty())
        .or(info.data_product.as_deref())
}

fn project_data_models(contract: &DataContract) -> Vec<DataModel> {
    contract
        .models
        .iter()
        .map(|(name, model)| DataModel {
            name: name.clone(),
            description: model.description.clone(),
            fields: model
                .fields
                .iter()
                .map(|(field_name, field)| DataModelField {
                    name: field_name.clone(),
                    description: field.description.clone(),
                    field_type: field.field_type.clone(),
                    physical_type: field.physical_type().map(str::to_string),
                    format: field.format.clone(),
                })
                .collect(),
        })
        .collect()
}

/// Quality declarations, model by model: the model's own rules first, then
/// each field's rules in field order.
fn project_quality(contract: &DataContract) -> Vec<Declaration> {
    contract
        .models
        .iter()
        .flat_map(|(model_name, model)| model_quality(model_name, model))
        .collect()
}

fn model_quality<'a>(
    model_name: &'a str,
    model: &'a Model,
) -> impl Iterator<Item = Declaration> + 'a {
    let model_rules = model
        .quality
        .iter()
        .map(move |rule| quality_declaration(rule, model_name, MODEL_LEVEL_FIELD));

    let field_rules = model.fields.iter().flat_map(move |(field_name, field)| {
        field
            .quality
            .iter()
            .map(move |rule| quality_declaration(rule, model_name, field_name))
    });

    model_rules.chain(field_rules)
}

fn quality_declaration(rule: &QualityRule, model_name: &str, field_name: &str) -> Declaration {
    let dimension = rule
        .rule_type
        .as_deref()
        .unwrap_or(DEFAULT_QUALITY_DIMENSION);
    let objective = quality_objective(rule);
    let unit = objective.as_ref().map(|_| NUMERIC_UNIT.to_string());

    Declaration {
        dimension: dimension.to_string(),
        display_title: format!("{} of {}.{}", capitalize(dimension), model_name, field_name),
        objective,
        unit,
        description: rule.description.clone(),
    }
}

/// First set constraint among `mustBe`, `mustBeGreaterThan` and
/// `mustBeGreaterThanOrEqualTo`, in that order.
fn quality_objective(rule: &QualityRule) -> Option<Value> {
    rule.must_be
        .as_ref()
        .or(rule.must_be_greater_than.as_ref())
        .or(rule.must_be_greater_than_or_equal_to.as_ref())
        .cloned()
}

fn project_pricing(terms: Option<&Terms>) -> Vec<PricingPlan> {
    terms
        .and_then(|terms| terms.billing.as_deref())
        .map(parse_billing)
        .into_iter()
        .collect()
}

fn project_license(terms: Option<&Terms>, info: &Info) -> License {
    License {
        scope: LicenseScope {
            definition: terms.and_then(|t| t.usage.clone()),
            restrictions: terms.and_then(|t| t.limitations.clone()),
            ..Default::default()
        },
        termination: LicenseTermination {
            continuity_conditions: terms.and_then(|t| t.notice_period.clone()),
            ..Default::default()
        },
        governance: LicenseGovernance {
            ownership: info.owner.clone(),
            ..Default::default()
        },
    }
}

fn project_service_levels(service_levels: Option<&ServiceLevels>) -> Vec<Declaration> {
    let Some(levels) = service_levels else {
        return Vec::new();
    };

    levels
        .populated()
        .map(|(dimension, level)| Declaration {
            dimension: dimension.as_str().to_string(),
            display_title: capitalize(dimension.as_str()),
            objective: level.percentage.clone().or_else(|| level.threshold.clone()),
            unit: level.unit.clone().or_else(|| level.interval.clone()),
            description: level.description.clone(),
        })
        .collect()
}

fn project_data_access(contract: &DataContract) -> DataAccess {
    DataAccess {
        default: contract.first_server().map(|(name, server)| AccessPoint {
            name: Some(name.to_string()),
            access_type: server.server_type.clone(),
            format: server.format.clone(),
            specification: server.schema.clone(),
            documentation_url: server.endpoint_url.clone(),
            description: server.description.clone(),
        }),
    }
}

fn project_data_holder(info: &Info) -> DataHolder {
    match &info.contact {
        Some(contact) => DataHolder {
            name: contact.name.clone(),
            email: contact.email.clone(),
            url: contact.url.clone(),
        },
        None => DataHolder::default(),
    }
}

fn project_support(info: &Info, service_levels: Option<&ServiceLevels>) -> Support {
    let contact = info.contact.as_ref();
    let support = service_levels.and_then(|levels| levels.get(ServiceLevelDimension::Support));

    Support {
        email: contact.and_then(|c| c.email.clone()),
        url: contact.and_then(|c| c.url.clone()),
        service_hours: support.and_then(|s| s.time.clone()),
        response_time: support.and_then(|s| s.response_time.clone()),
    }
}

/// Uppercases the first character.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
