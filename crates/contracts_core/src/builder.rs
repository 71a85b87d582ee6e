//! Builder pattern for creating data contracts.
//!
//! This module provides ergonomic builders for constructing contracts
//! and their components with a fluent API.

use crate::{
    Contact, DataContract, Field, FieldConfig, Info, Model, QualityRule, Server, ServiceLevels,
    Terms,
};
use serde_json::Value;

/// Builder for creating a `DataContract`.
///
/// # Example
///
/// ```rust
/// use contracts_core::{DataContractBuilder, FieldBuilder, ModelBuilder};
///
/// let contract = DataContractBuilder::new("orders-latest")
///     .title("Orders Latest")
///     .owner("checkout-team")
///     .version("2.0.0")
///     .model(
///         "orders",
///         ModelBuilder::new()
///             .field("order_id", FieldBuilder::new("string").build())
///             .build(),
///     )
///     .build();
///
/// assert_eq!(contract.models.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct DataContractBuilder {
    contract: DataContract,
    info: Info,
}

impl DataContractBuilder {
    /// Creates a new builder for the contract with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            contract: DataContract {
                id: Some(id.into()),
                ..Default::default()
            },
            info: Info::default(),
        }
    }

    /// Sets the data contract specification version.
    pub fn specification(mut self, version: impl Into<String>) -> Self {
        self.contract.data_contract_specification = Some(version.into());
        self
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.info.title = Some(title.into());
        self
    }

    /// Sets the contract version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.info.version = Some(version.into());
        self
    }

    /// Sets the lifecycle status.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.info.status = Some(status.into());
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.info.description = Some(description.into());
        self
    }

    /// Sets the owner.
    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.info.owner = Some(owner.into());
        self
    }

    /// Sets the name of the data product.
    pub fn data_product(mut self, name: impl Into<String>) -> Self {
        self.info.data_product = Some(name.into());
        self
    }

    /// Sets the contact.
    pub fn contact(mut self, contact: Contact) -> Self {
        self.info.contact = Some(contact);
        self
    }

    /// Adds a tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.contract.tags.push(tag.into());
        self
    }

    /// Sets the terms.
    pub fn terms(mut self, terms: Terms) -> Self {
        self.contract.terms = Some(terms);
        self
    }

    /// Adds a server. Servers keep insertion order.
    pub fn server(mut self, name: impl Into<String>, server: Server) -> Self {
        self.contract.servers.insert(name.into(), server);
        self
    }

    /// Adds a model. Models keep insertion order.
    pub fn model(mut self, name: impl Into<String>, model: Model) -> Self {
        self.contract.models.insert(name.into(), model);
        self
    }

    /// Sets the service levels.
    pub fn service_levels(mut self, levels: ServiceLevels) -> Self {
        self.contract.servicelevels = Some(levels);
        self
    }

    /// Builds the contract.
    pub fn build(self) -> DataContract {
        DataContract {
            info: Some(self.info),
            ..self.contract
        }
    }
}

/// Builder for creating a `Model`.
#[derive(Debug, Default)]
pub struct ModelBuilder {
    model: Model,
}

impl ModelBuilder {
    /// Creates a new model builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the model description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.model.description = Some(description.into());
        self
    }

    /// Sets the model type.
    pub fn model_type(mut self, model_type: impl Into<String>) -> Self {
        self.model.model_type = Some(model_type.into());
        self
    }

    /// Adds a field. Fields keep insertion order.
    pub fn field(mut self, name: impl Into<String>, field: Field) -> Self {
        self.model.fields.insert(name.into(), field);
        self
    }

    /// Adds a model level quality rule.
    pub fn quality(mut self, rule: QualityRule) -> Self {
        self.model.quality.push(rule);
        self
    }

    /// Builds the model.
    pub fn build(self) -> Model {
        self.model
    }
}

/// Builder for creating a `Field`.
///
/// # Example
///
/// ```rust
/// use contracts_core::FieldBuilder;
///
/// let field = FieldBuilder::new("string")
///     .description("Unique order identifier")
///     .physical_type("VARCHAR(36)")
///     .build();
///
/// assert_eq!(field.physical_type(), Some("VARCHAR(36)"));
/// ```
#[derive(Debug, Default)]
pub struct FieldBuilder {
    field: Field,
}

impl FieldBuilder {
    /// Creates a new field builder.
    ///
    /// # Arguments
    ///
    /// * `field_type` - Logical type (e.g., "string", "decimal")
    pub fn new(field_type: impl Into<String>) -> Self {
        Self {
            field: Field {
                field_type: Some(field_type.into()),
                ..Default::default()
            },
        }
    }

    /// Sets the field description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.field.description = Some(description.into());
        self
    }

    /// Sets the format hint.
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.field.format = Some(format.into());
        self
    }

    /// Sets the physical type annotation.
    pub fn physical_type(mut self, physical_type: impl Into<String>) -> Self {
        self.field
            .config
            .get_or_insert_with(FieldConfig::default)
            .physical_type = Some(physical_type.into());
        self
    }

    /// Adds a quality rule to the field.
    pub fn quality(mut self, rule: QualityRule) -> Self {
        self.field.quality.push(rule);
        self
    }

    /// Builds the field.
    pub fn build(self) -> Field {
        self.field
    }
}

/// Builder for creating a `QualityRule`.
///
/// # Example
///
/// ```rust
/// use contracts_core::QualityRuleBuilder;
///
/// let rule = QualityRuleBuilder::new("row_count")
///     .must_be_greater_than(1000)
///     .build();
///
/// assert_eq!(rule.rule_type.as_deref(), Some("row_count"));
/// ```
#[derive(Debug, Default)]
pub struct QualityRuleBuilder {
    rule: QualityRule,
}

impl QualityRuleBuilder {
    /// Creates a rule of the given type.
    pub fn new(rule_type: impl Into<String>) -> Self {
        Self {
            rule: QualityRule {
                rule_type: Some(rule_type.into()),
                ..Default::default()
            },
        }
    }

    /// Creates a rule without a type.
    pub fn untyped() -> Self {
        Self::default()
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.rule.description = Some(description.into());
        self
    }

    /// Sets the `mustBe` constraint.
    pub fn must_be(mut self, value: impl Into<Value>) -> Self {
        self.rule.must_be = Some(value.into());
        self
    }

    /// Sets the `mustBeGreaterThan` constraint.
    pub fn must_be_greater_than(mut self, value: impl Into<Value>) -> Self {
        self.rule.must_be_greater_than = Some(value.into());
        self
    }

    /// Sets the `mustBeGreaterThanOrEqualTo` constraint.
    pub fn must_be_greater_than_or_equal_to(mut self, value: impl Into<Value>) -> Self {
        self.rule.must_be_greater_than_or_equal_to = Some(value.into());
        self
    }

    /// Builds the rule.
    pub fn build(self) -> QualityRule {
        self.rule
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_contract_builder_minimal() {
        let contract = DataContractBuilder::new("orders").build();

        assert_eq!(contract.id.as_deref(), Some("orders"));
        assert_eq!(contract.info, Some(Info::default()));
        assert!(contract.servers.is_empty());
        assert!(contract.models.is_empty());
        assert!(contract.servicelevels.is_none());
    }

    #[test]
    fn test_contract_builder_full() {
        let contract = DataContractBuilder::new("orders")
            .specification("1.1.0")
            .title("Orders")
            .version("1.0.0")
            .status("active")
            .description("All orders")
            .owner("checkout-team")
            .data_product("Checkout")
            .contact(Contact {
                name: Some("Jane".to_string()),
                ..Default::default()
            })
            .tag("sales")
            .tag("orders")
            .terms(Terms {
                usage: Some("Analytics".to_string()),
                ..Default::default()
            })
            .server("prod", Server::default())
            .service_levels(ServiceLevels::default())
            .build();

        let info = contract.info.as_ref().unwrap();
        assert_eq!(info.title.as_deref(), Some("Orders"));
        assert_eq!(info.owner.as_deref(), Some("checkout-team"));
        assert_eq!(info.data_product.as_deref(), Some("Checkout"));
        assert_eq!(
            info.contact.as_ref().unwrap().name.as_deref(),
            Some("Jane")
        );
        assert_eq!(contract.tags, vec!["sales", "orders"]);
        assert_eq!(contract.data_contract_specification.as_deref(), Some("1.1.0"));
        assert!(contract.servers.contains_key("prod"));
        assert!(contract.servicelevels.is_some());
    }

    #[test]
    fn test_model_builder_keeps_field_order() {
        let model = ModelBuilder::new()
            .description("Orders")
            .model_type("table")
            .field("zeta", FieldBuilder::new("string").build())
            .field("alpha", FieldBuilder::new("int").build())
            .quality(QualityRuleBuilder::new("row_count").build())
            .build();

        let names: Vec<_> = model.fields.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
        assert_eq!(model.quality.len(), 1);
        assert_eq!(model.model_type.as_deref(), Some("table"));
    }

    #[test]
    fn test_field_builder() {
        let field = FieldBuilder::new("string")
            .description("Customer email")
            .format("email")
            .physical_type("VARCHAR(255)")
            .quality(QualityRuleBuilder::untyped().must_be(0).build())
            .build();

        assert_eq!(field.field_type.as_deref(), Some("string"));
        assert_eq!(field.format.as_deref(), Some("email"));
        assert_eq!(field.physical_type(), Some("VARCHAR(255)"));
        assert_eq!(field.quality[0].rule_type, None);
        assert_eq!(field.quality[0].must_be, Some(json!(0)));
    }

    #[test]
    fn test_quality_rule_builder() {
        let rule = QualityRuleBuilder::new("freshness")
            .description("Recent data")
            .must_be_greater_than(3)
            .must_be_greater_than_or_equal_to(1.5)
            .build();

        assert_eq!(rule.rule_type.as_deref(), Some("freshness"));
        assert_eq!(rule.description.as_deref(), Some("Recent data"));
        assert_eq!(rule.must_be, None);
        assert_eq!(rule.must_be_greater_than, Some(json!(3)));
        assert_eq!(rule.must_be_greater_than_or_equal_to, Some(json!(1.5)));
    }
}
