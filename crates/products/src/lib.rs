//! Shipment product catalog.
//!
//! Fixed carrier data: which products exist, their size and weight limits, and the
//! service add-ons each one permits. Pure lookups, no IO.

pub mod catalog;
pub mod product_type;
pub mod service;

pub use catalog::{
    Bounds, ProductCatalog, ProductEntry, all_products, find_product, get_product,
    products_offering,
};
pub use product_type::ProductType;
pub use service::{SERVICE_NAMES, Service, service_name};
