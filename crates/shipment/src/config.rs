//! SDK configuration.
//!
//! Selects the carrier environment. Credentials and the transport that would use
//! them are not part of this crate.

use thiserror::Error;

pub const SANDBOX_VAR: &str = "DHLSHIP_SANDBOX";

/// Service description for the business shipment API, version 1.0.
pub const WSDL_URL: &str = concat!(
    "https://cig.dhl.de/cig-wsdls/com/dpdhl/wsdl/geschaeftskundenversand-api/1.0/",
    "geschaeftskundenversand-api-1.0.wsdl"
);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ApiVersion {
    pub major: u32,
    pub minor: u32,
}

impl core::fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

pub const API_VERSION: ApiVersion = ApiVersion { major: 1, minor: 0 };

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?} (expected true/false, 1/0 or yes/no)")]
    InvalidFlag { name: &'static str, value: String },
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Environment {
    Sandbox,
    #[default]
    Production,
}

impl Environment {
    pub fn endpoint_url(self) -> &'static str {
        match self {
            Environment::Sandbox => "https://cig.dhl.de/services/sandbox/soap",
            Environment::Production => "https://cig.dhl.de/services/production/soap",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SdkConfig {
    pub environment: Environment,
}

impl SdkConfig {
    /// Read `DHLSHIP_SANDBOX`; an unset variable keeps the production default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(SANDBOX_VAR) {
            if parse_flag(SANDBOX_VAR, &value)? {
                config.environment = Environment::Sandbox;
            }
        }

        Ok(config)
    }

    pub fn endpoint_url(&self) -> &'static str {
        self.environment.endpoint_url()
    }
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: value.to_string(),
        }),
    }
}
