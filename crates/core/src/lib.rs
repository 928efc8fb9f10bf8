//! `dhlship-core` — shared building blocks for the shipment SDK crates.
//!
//! This crate contains **pure domain** primitives (no transport, no encoding).

pub mod error;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;
