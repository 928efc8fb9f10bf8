//! Shipment details, validated against the product catalog.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use dhlship_core::{DomainError, DomainResult};
use dhlship_products::{Bounds, ProductEntry, ProductType, Service, get_product};

/// Weight used when the caller gives no measurements.
pub const DEFAULT_WEIGHT_KG: f64 = 5.0;
/// Edge length (all three sides) used when the caller gives no measurements.
pub const DEFAULT_EDGE_CM: f64 = 50.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Length,
    Width,
    Height,
}

impl core::fmt::Display for Dimension {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Dimension::Length => "length",
            Dimension::Width => "width",
            Dimension::Height => "height",
        })
    }
}

/// A single reason a shipment does not fit its product.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Violation {
    #[error("product {0} is not in the catalog")]
    UnknownProduct(ProductType),

    #[error("{dimension} {value} cm is outside {bounds} cm")]
    OutOfBounds {
        dimension: Dimension,
        value: f64,
        bounds: Bounds,
    },

    #[error("weight must be positive (got {0} kg)")]
    NonPositiveWeight(f64),

    #[error("weight {weight_kg} kg exceeds {max_weight_kg} kg")]
    Overweight { weight_kg: f64, max_weight_kg: f64 },

    #[error("service {0} is not offered for this product")]
    ServiceNotOffered(Service),
}

/// What is being shipped, with which product, on which day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentDetails {
    pub product: ProductType,
    pub shipment_date: NaiveDate,
    pub weight_kg: f64,
    pub length_cm: f64,
    pub width_cm: f64,
    pub height_cm: f64,
    pub services: BTreeSet<Service>,
}

impl ShipmentDetails {
    /// Details for the default package: 5 kg, 50 x 50 x 50 cm, no add-ons.
    pub fn new(product: ProductType, shipment_date: NaiveDate) -> Self {
        Self {
            product,
            shipment_date,
            weight_kg: DEFAULT_WEIGHT_KG,
            length_cm: DEFAULT_EDGE_CM,
            width_cm: DEFAULT_EDGE_CM,
            height_cm: DEFAULT_EDGE_CM,
            services: BTreeSet::new(),
        }
    }

    pub fn with_weight(mut self, weight_kg: f64) -> Self {
        self.weight_kg = weight_kg;
        self
    }

    pub fn with_dimensions(mut self, length_cm: f64, width_cm: f64, height_cm: f64) -> Self {
        self.length_cm = length_cm;
        self.width_cm = width_cm;
        self.height_cm = height_cm;
        self
    }

    pub fn with_service(mut self, service: Service) -> Self {
        self.services.insert(service);
        self
    }

    /// Every way these details break the product's limits. Empty means valid.
    pub fn violations(&self) -> Vec<Violation> {
        self.check().err().unwrap_or_default()
    }

    /// Check the details against the catalog, returning the matching entry.
    pub fn validate(&self) -> DomainResult<&'static ProductEntry> {
        match self.check() {
            Ok(entry) => {
                tracing::debug!(
                    product = %self.product,
                    services = self.services.len(),
                    "shipment accepted"
                );
                Ok(entry)
            }
            Err(violations) => {
                let reasons = violations
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; ");
                tracing::warn!(product = %self.product, %reasons, "shipment rejected");
                Err(DomainError::validation(reasons))
            }
        }
    }

    fn check(&self) -> Result<&'static ProductEntry, Vec<Violation>> {
        let Some(entry) = get_product(self.product) else {
            return Err(vec![Violation::UnknownProduct(self.product)]);
        };

        let mut violations = Vec::new();

        for (dimension, value, bounds) in [
            (Dimension::Length, self.length_cm, entry.length()),
            (Dimension::Width, self.width_cm, entry.width()),
            (Dimension::Height, self.height_cm, entry.height()),
        ] {
            if !bounds.contains(value) {
                violations.push(Violation::OutOfBounds {
                    dimension,
                    value,
                    bounds,
                });
            }
        }

        if self.weight_kg.is_nan() || self.weight_kg <= 0.0 {
            violations.push(Violation::NonPositiveWeight(self.weight_kg));
        } else if self.weight_kg > entry.max_weight() {
            violations.push(Violation::Overweight {
                weight_kg: self.weight_kg,
                max_weight_kg: entry.max_weight(),
            });
        }

        violations.extend(
            self.services
                .iter()
                .filter(|service| !entry.allows(**service))
                .map(|service| Violation::ServiceNotOffered(*service)),
        );

        if violations.is_empty() {
            Ok(entry)
        } else {
            Err(violations)
        }
    }

    /// One-line human-readable description.
    pub fn summary(&self) -> String {
        let name = get_product(self.product)
            .map(ProductEntry::display_name)
            .unwrap_or("unknown product");

        let mut line = format!(
            "{} ({}), {} kg, {}x{}x{} cm",
            name, self.product, self.weight_kg, self.length_cm, self.width_cm, self.height_cm
        );

        if !self.services.is_empty() {
            let labels = self
                .services
                .iter()
                .map(|s| s.display_name())
                .collect::<Vec<_>>()
                .join(", ");
            line.push_str(": ");
            line.push_str(&labels);
        }

        line
    }
}
