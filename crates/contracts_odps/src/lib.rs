//! # Data Contracts ODPS Exporter
//!
//! Converts data contracts into documents of the Open Data Product
//! Specification (ODPS 3.0). The crate is split into:
//!
//! - **mapper**: the pure contract to product mapping (`to_odps`)
//! - **pricing**: the best-effort reading of free text billing terms
//! - **encode**: YAML/JSON encoding of the resulting document
//!
//! ## Example
//!
//! ```rust
//! use contracts_core::{DataContractBuilder, Terms};
//! use contracts_odps::to_odps;
//!
//! let contract = DataContractBuilder::new("orders-latest")
//!     .title("Orders Latest")
//!     .owner("checkout-team")
//!     .terms(Terms {
//!         billing: Some("5000 USD month".to_string()),
//!         ..Default::default()
//!     })
//!     .build();
//!
//! let document = to_odps(&contract).expect("contract has info");
//! let plan = &document.product.pricing_plans.en[0];
//! assert_eq!(plan.price_currency.as_deref(), Some("USD"));
//! ```

mod config;
mod encode;
mod error;
mod mapper;
mod pricing;
mod product;

pub use config::*;
pub use encode::*;
pub use error::*;
pub use mapper::*;
pub use pricing::*;
pub use product::*;
