//! Shipment-side consumers of the product catalog.
//!
//! Builds shipment details and checks them against the catalog before anything
//! is handed to the carrier. Request encoding and transport live elsewhere.

pub mod config;
pub mod details;

pub use config::{API_VERSION, ApiVersion, ConfigError, Environment, SdkConfig, WSDL_URL};
pub use details::{
    DEFAULT_EDGE_CM, DEFAULT_WEIGHT_KG, Dimension, ShipmentDetails, Violation,
};
