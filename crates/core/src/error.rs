//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Lookups against the product catalog never produce one of these; an unknown
/// product there is a plain `None`. Errors are reserved for parsing identifiers
/// and for rejecting shipments that break catalog limits.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A shipment (or other input) failed validation.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A string did not name one of the known product codes.
    #[error("unknown product type: {0}")]
    InvalidProductType(String),

    /// A string did not name one of the known service add-ons.
    #[error("unknown service: {0}")]
    InvalidService(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_product_type(code: impl Into<String>) -> Self {
        Self::InvalidProductType(code.into())
    }

    pub fn invalid_service(identifier: impl Into<String>) -> Self {
        Self::InvalidService(identifier.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            DomainError::invalid_product_type("V99XX").to_string(),
            "unknown product type: V99XX"
        );
        assert_eq!(
            DomainError::invalid_service("teleport").to_string(),
            "unknown service: teleport"
        );
        assert_eq!(
            DomainError::validation("weight too high").to_string(),
            "validation failed: weight too high"
        );
    }
}
