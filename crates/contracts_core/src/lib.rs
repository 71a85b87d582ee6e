//! # Data Contracts Core
//!
//! Core data structures and types for the Data Contracts Engine.
//!
//! This crate provides the data contract document model consumed by the
//! exporters. A data contract is a formal agreement about the structure,
//! quality, and service levels of data shared between systems.
//!
//! ## Key Concepts
//!
//! - **DataContract**: identity, info, terms, servers, models and service levels
//! - **Model / Field**: the logical schema, in document order
//! - **QualityRule**: a constraint attached to a model or a field
//! - **ServiceLevels**: availability, retention, latency, freshness, frequency,
//!   support and backup guarantees
//!
//! ## Example
//!
//! ```rust
//! use contracts_core::{DataContractBuilder, FieldBuilder, ModelBuilder, QualityRuleBuilder};
//!
//! let contract = DataContractBuilder::new("orders-latest")
//!     .title("Orders Latest")
//!     .owner("checkout-team")
//!     .model(
//!         "orders",
//!         ModelBuilder::new()
//!             .quality(QualityRuleBuilder::new("row_count").must_be_greater_than(0).build())
//!             .field("order_id", FieldBuilder::new("string").build())
//!             .build(),
//!     )
//!     .build();
//!
//! assert_eq!(contract.quality_rule_count(), 1);
//! ```

pub mod builder;
pub mod contract;
pub mod error;

pub use builder::*;
pub use contract::*;
pub use error::*;
