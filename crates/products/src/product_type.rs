//! Carrier product codes.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use dhlship_core::DomainError;

/// A sellable shipment product, identified on the wire by its carrier code.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProductType {
    #[serde(rename = "V01PAK")]
    NationalPackage,
    #[serde(rename = "V01PRIO")]
    NationalPackagePrio,
    #[serde(rename = "V06PAK")]
    SameDayPackage,
    #[serde(rename = "V53WPAK")]
    InternationalPackage,
    #[serde(rename = "V54EPAK")]
    EuropaPackage,
    #[serde(rename = "V55PAK")]
    PackedConnect,
    #[serde(rename = "V06TG")]
    SameDayMessenger,
    #[serde(rename = "V06WZ")]
    WishTimeMessenger,
    #[serde(rename = "V86PARCEL")]
    AustriaPackage,
    #[serde(rename = "V87PARCEL")]
    ConnectPackage,
    #[serde(rename = "V82PARCEL")]
    AustriaInternationalPackage,
}

impl ProductType {
    pub const ALL: [ProductType; 11] = [
        ProductType::NationalPackage,
        ProductType::NationalPackagePrio,
        ProductType::SameDayPackage,
        ProductType::InternationalPackage,
        ProductType::EuropaPackage,
        ProductType::PackedConnect,
        ProductType::SameDayMessenger,
        ProductType::WishTimeMessenger,
        ProductType::AustriaPackage,
        ProductType::ConnectPackage,
        ProductType::AustriaInternationalPackage,
    ];

    /// Carrier product code, as sent in shipment requests.
    pub const fn code(self) -> &'static str {
        match self {
            ProductType::NationalPackage => "V01PAK",
            ProductType::NationalPackagePrio => "V01PRIO",
            ProductType::SameDayPackage => "V06PAK",
            ProductType::InternationalPackage => "V53WPAK",
            ProductType::EuropaPackage => "V54EPAK",
            ProductType::PackedConnect => "V55PAK",
            ProductType::SameDayMessenger => "V06TG",
            ProductType::WishTimeMessenger => "V06WZ",
            ProductType::AustriaPackage => "V86PARCEL",
            ProductType::ConnectPackage => "V87PARCEL",
            ProductType::AustriaInternationalPackage => "V82PARCEL",
        }
    }

    /// Resolve a carrier code. Codes are matched exactly (they are upper-case on the wire).
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }
}

impl core::fmt::Display for ProductType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ProductType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| DomainError::invalid_product_type(s))
    }
}
