//! Service add-ons and their display labels.
//!
//! The identifiers are the carrier schema's field names and keep its spelling
//! (`individualSenderRequiredmentsEnabled`, `returnImmediatlyIfShipmentFailed`).

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use dhlship_core::DomainError;

macro_rules! define_services {
    ($($variant:ident => $identifier:tt, $label:tt;)*) => {
        /// An optional shipment feature that a product may or may not permit.
        #[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum Service {
            $(
                #[serde(rename = $identifier)]
                $variant,
            )*
        }

        impl Service {
            pub const ALL: &'static [Service] = &[$(Service::$variant,)*];

            /// Field name used by the carrier schema.
            pub const fn identifier(self) -> &'static str {
                match self {
                    $(Service::$variant => $identifier,)*
                }
            }

            /// Human-readable label.
            pub const fn display_name(self) -> &'static str {
                match self {
                    $(Service::$variant => $label,)*
                }
            }
        }

        /// Service identifier to label, in declaration order.
        pub const SERVICE_NAMES: &[(&str, &str)] = &[$(($identifier, $label),)*];
    };
}

define_services! {
    PreferredNeighbour => "preferredNeighbourEnabled", "Wunschnachbar";
    PreferredLocation => "preferredLocationEnabled", "Wunschort";
    VisualCheckOfAge => "visualCheckOfAgeEnabled", "Alterssichtprüfung";
    PersonalHandover => "personalHandover", "Eigenhändig";
    NamedPersonOnly => "namedPersonOnly", "persönliche Übergabe";
    IdentCheck => "identCheckEnabled", "Ident-Check";
    Endorsement => "endorsementEnabled", "Vorausverfügung";
    ReturnReceipt => "returnReceipt", "Rückschein";
    PreferredDay => "preferredDayEnabled", "Wunschtag";
    PreferredTime => "preferredTimeEnabled", "Wunschzeit";
    DisableNeighbourDelivery => "disableNeighbourDelivery", "keine Nachbarschaftszustellung";
    GoGreen => "goGreen", "GoGreen";
    AdditionalInsurance => "additionalInsuranceEnabled", "Transportversicherung";
    BulkyGoods => "bulkyGoods", "Sperrgut";
    CashOnDelivery => "cashOnDeliveryEnabled", "Nachnahme";
    DayOfDelivery => "dayOfDeliveryEnabled", "Zustelldatum";
    DeliveryTimeframe => "deliveryTimeframeEnabled", "Zustellzeitfenster";
    ShipmentHandling => "shipmentHandlingEnabled", "Sendungshandling";
    Perishables => "perishables", "verderbliche Ware";
    IndividualSenderRequirements =>
        "individualSenderRequiredmentsEnabled", "Individuelle Senderhinweise";
    Premium => "premium", "Premium";
    PackagingReturn => "packagingReturn", "Verpackungsrücknahme";
    NoticeNonDeliverability => "noticeNonDeliverability", "Unzustellbarkeitsnachricht";
    ReturnImmediatelyIfShipmentFailed => "returnImmediatlyIfShipmentFailed", "ReturnImmediately";
}

impl Service {
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.identifier() == identifier)
    }
}

/// Label for a service identifier, or `None` if the identifier is unknown.
pub fn service_name(identifier: &str) -> Option<&'static str> {
    SERVICE_NAMES
        .iter()
        .find(|(id, _)| *id == identifier)
        .map(|(_, label)| *label)
}

impl core::fmt::Display for Service {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Service {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_identifier(s).ok_or_else(|| DomainError::invalid_service(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_every_service_once() {
        assert_eq!(Service::ALL.len(), 24);
        assert_eq!(SERVICE_NAMES.len(), Service::ALL.len());

        let mut ids: Vec<_> = SERVICE_NAMES.iter().map(|(id, _)| *id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SERVICE_NAMES.len());
    }

    #[test]
    fn table_agrees_with_enum() {
        for service in Service::ALL {
            assert_eq!(service_name(service.identifier()), Some(service.display_name()));
        }
    }

    #[test]
    fn known_labels() {
        assert_eq!(service_name("cashOnDeliveryEnabled"), Some("Nachnahme"));
        assert_eq!(service_name("bulkyGoods"), Some("Sperrgut"));
        assert_eq!(Service::VisualCheckOfAge.display_name(), "Alterssichtprüfung");
    }

    #[test]
    fn unknown_identifier_has_no_label() {
        assert_eq!(service_name("teleport"), None);
        assert_eq!(service_name(""), None);
    }

    #[test]
    fn carrier_spelling_is_kept() {
        assert_eq!(
            Service::IndividualSenderRequirements.identifier(),
            "individualSenderRequiredmentsEnabled"
        );
        assert_eq!(
            "returnImmediatlyIfShipmentFailed".parse::<Service>().unwrap(),
            Service::ReturnImmediatelyIfShipmentFailed
        );
    }

    #[test]
    fn parse_rejects_unknown_identifier() {
        let err = "premiumPlus".parse::<Service>().unwrap_err();
        assert_eq!(err, DomainError::InvalidService("premiumPlus".to_string()));
    }

    #[test]
    fn serializes_as_identifier() {
        let json = serde_json::to_string(&Service::CashOnDelivery).unwrap();
        assert_eq!(json, "\"cashOnDeliveryEnabled\"");
    }
}
