//! Product catalog: physical limits and permitted add-ons per product.
//!
//! The table is built once, on first access, behind a [`LazyLock`]. Concurrent
//! first callers block until population finishes, so nobody ever sees a partial
//! table. After that the catalog is read-only for the life of the process.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::Serialize;

use dhlship_core::ValueObject;

use crate::product_type::ProductType;
use crate::service::Service;

/// Inclusive `min..=max` range (centimeters for dimensions).
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Bounds {
    min: f64,
    max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl ValueObject for Bounds {}

impl core::fmt::Display for Bounds {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// One sellable shipment product and its constraints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductEntry {
    #[serde(rename = "type")]
    product_type: ProductType,
    display_name: &'static str,
    is_austrian_product: bool,
    length: Bounds,
    width: Bounds,
    height: Bounds,
    /// Kilograms.
    max_weight: f64,
    allowed_services: &'static [Service],
}

impl ProductEntry {
    const fn new(
        product_type: ProductType,
        display_name: &'static str,
        length: Bounds,
        width: Bounds,
        height: Bounds,
        max_weight: f64,
        allowed_services: &'static [Service],
    ) -> Self {
        Self {
            product_type,
            display_name,
            is_austrian_product: false,
            length,
            width,
            height,
            max_weight,
            allowed_services,
        }
    }

    const fn austrian(mut self) -> Self {
        self.is_austrian_product = true;
        self
    }

    pub fn product_type(&self) -> ProductType {
        self.product_type
    }

    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    pub fn is_austrian_product(&self) -> bool {
        self.is_austrian_product
    }

    pub fn length(&self) -> Bounds {
        self.length
    }

    pub fn width(&self) -> Bounds {
        self.width
    }

    pub fn height(&self) -> Bounds {
        self.height
    }

    pub fn min_length(&self) -> f64 {
        self.length.min
    }

    pub fn max_length(&self) -> f64 {
        self.length.max
    }

    pub fn min_width(&self) -> f64 {
        self.width.min
    }

    pub fn max_width(&self) -> f64 {
        self.width.max
    }

    pub fn min_height(&self) -> f64 {
        self.height.min
    }

    pub fn max_height(&self) -> f64 {
        self.height.max
    }

    pub fn max_weight(&self) -> f64 {
        self.max_weight
    }

    pub fn allowed_services(&self) -> &'static [Service] {
        self.allowed_services
    }

    pub fn allows(&self, service: Service) -> bool {
        self.allowed_services.contains(&service)
    }
}

const STANDARD_LENGTH: Bounds = Bounds::new(15.0, 200.0);
const STANDARD_WIDTH: Bounds = Bounds::new(11.0, 200.0);
const STANDARD_HEIGHT: Bounds = Bounds::new(1.0, 200.0);

const COMPACT_LENGTH: Bounds = Bounds::new(15.0, 120.0);
const COMPACT_WIDTH: Bounds = Bounds::new(11.0, 60.0);
const COMPACT_HEIGHT: Bounds = Bounds::new(1.0, 60.0);
const COMPACT_RAISED_HEIGHT: Bounds = Bounds::new(3.5, 60.0);

const MAX_WEIGHT_KG: f64 = 31.5;

const MESSENGER_SERVICES: &[Service] = &[
    Service::PreferredNeighbour,
    Service::VisualCheckOfAge,
    Service::Endorsement,
    Service::GoGreen,
    Service::DayOfDelivery,
    Service::DeliveryTimeframe,
    Service::ShipmentHandling,
    Service::Perishables,
    Service::IndividualSenderRequirements,
];

const AUSTRIA_SERVICES: &[Service] = &[
    Service::AdditionalInsurance,
    Service::BulkyGoods,
    Service::CashOnDelivery,
];

/// Carrier product sheet. Every value is a literal; nothing is derived.
const DEFINITIONS: [ProductEntry; 11] = [
    ProductEntry::new(
        ProductType::NationalPackage,
        "DHL Paket",
        STANDARD_LENGTH,
        STANDARD_WIDTH,
        STANDARD_HEIGHT,
        MAX_WEIGHT_KG,
        &[
            Service::PreferredNeighbour,
            Service::PreferredLocation,
            Service::VisualCheckOfAge,
            Service::PersonalHandover,
            Service::NamedPersonOnly,
            Service::IdentCheck,
            Service::PreferredDay,
            Service::PreferredTime,
            Service::DisableNeighbourDelivery,
            Service::GoGreen,
            Service::AdditionalInsurance,
            Service::BulkyGoods,
            Service::CashOnDelivery,
            Service::IndividualSenderRequirements,
            Service::PackagingReturn,
            Service::NoticeNonDeliverability,
        ],
    ),
    ProductEntry::new(
        ProductType::NationalPackagePrio,
        "DHL Paket PRIO",
        STANDARD_LENGTH,
        STANDARD_WIDTH,
        STANDARD_HEIGHT,
        MAX_WEIGHT_KG,
        &[
            Service::PreferredNeighbour,
            Service::PreferredLocation,
            Service::VisualCheckOfAge,
            Service::NamedPersonOnly,
            Service::IdentCheck,
            Service::PreferredDay,
            Service::PreferredTime,
            Service::DisableNeighbourDelivery,
            Service::GoGreen,
            Service::AdditionalInsurance,
            Service::CashOnDelivery,
            Service::IndividualSenderRequirements,
            Service::PackagingReturn,
            Service::NoticeNonDeliverability,
        ],
    ),
    ProductEntry::new(
        ProductType::SameDayPackage,
        "DHL Paket Taggleich",
        STANDARD_LENGTH,
        STANDARD_WIDTH,
        STANDARD_HEIGHT,
        MAX_WEIGHT_KG,
        &[
            Service::PreferredNeighbour,
            Service::PreferredLocation,
            Service::VisualCheckOfAge,
            Service::NamedPersonOnly,
            Service::IdentCheck,
            Service::PreferredDay,
            Service::PreferredTime,
            Service::DisableNeighbourDelivery,
            Service::GoGreen,
            Service::AdditionalInsurance,
            Service::BulkyGoods,
            Service::CashOnDelivery,
            Service::IndividualSenderRequirements,
            Service::PackagingReturn,
            Service::NoticeNonDeliverability,
            Service::ReturnImmediatelyIfShipmentFailed,
        ],
    ),
    ProductEntry::new(
        ProductType::InternationalPackage,
        "DHL Paket International",
        COMPACT_LENGTH,
        COMPACT_WIDTH,
        COMPACT_HEIGHT,
        MAX_WEIGHT_KG,
        &[
            Service::Endorsement,
            Service::ReturnReceipt,
            Service::GoGreen,
            Service::AdditionalInsurance,
            Service::BulkyGoods,
            Service::CashOnDelivery,
            Service::Premium,
        ],
    ),
    ProductEntry::new(
        ProductType::EuropaPackage,
        "DHL Europapaket",
        COMPACT_LENGTH,
        COMPACT_WIDTH,
        COMPACT_RAISED_HEIGHT,
        MAX_WEIGHT_KG,
        &[Service::GoGreen, Service::AdditionalInsurance],
    ),
    ProductEntry::new(
        ProductType::PackedConnect,
        "DHL Paket Connect",
        COMPACT_LENGTH,
        COMPACT_WIDTH,
        COMPACT_RAISED_HEIGHT,
        MAX_WEIGHT_KG,
        &[Service::GoGreen, Service::AdditionalInsurance, Service::BulkyGoods],
    ),
    ProductEntry::new(
        ProductType::SameDayMessenger,
        "DHL Kurier Taggleich",
        STANDARD_LENGTH,
        STANDARD_WIDTH,
        STANDARD_HEIGHT,
        MAX_WEIGHT_KG,
        MESSENGER_SERVICES,
    ),
    ProductEntry::new(
        ProductType::WishTimeMessenger,
        "DHL Kurier Wunschzeit",
        STANDARD_LENGTH,
        STANDARD_WIDTH,
        STANDARD_HEIGHT,
        MAX_WEIGHT_KG,
        MESSENGER_SERVICES,
    ),
    ProductEntry::new(
        ProductType::AustriaPackage,
        "DHL Paket Austria",
        COMPACT_LENGTH,
        COMPACT_WIDTH,
        COMPACT_HEIGHT,
        MAX_WEIGHT_KG,
        AUSTRIA_SERVICES,
    )
    .austrian(),
    ProductEntry::new(
        ProductType::ConnectPackage,
        "DHL Paket Connect",
        COMPACT_LENGTH,
        COMPACT_WIDTH,
        COMPACT_RAISED_HEIGHT,
        MAX_WEIGHT_KG,
        AUSTRIA_SERVICES,
    )
    .austrian(),
    ProductEntry::new(
        ProductType::AustriaInternationalPackage,
        "DHL Paket International",
        COMPACT_LENGTH,
        COMPACT_WIDTH,
        COMPACT_HEIGHT,
        MAX_WEIGHT_KG,
        AUSTRIA_SERVICES,
    )
    .austrian(),
];

static CATALOG: LazyLock<ProductCatalog> = LazyLock::new(ProductCatalog::populate);

/// Immutable mapping from product type to its entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProductCatalog {
    entries: BTreeMap<ProductType, ProductEntry>,
}

impl ProductCatalog {
    fn populate() -> Self {
        let mut entries = BTreeMap::new();
        for entry in DEFINITIONS {
            let previous = entries.insert(entry.product_type, entry);
            debug_assert!(previous.is_none(), "duplicate product definition");
        }

        tracing::debug!(products = entries.len(), "product catalog populated");

        Self { entries }
    }

    pub fn get(&self, product_type: ProductType) -> Option<&ProductEntry> {
        self.entries.get(&product_type)
    }

    pub fn contains(&self, product_type: ProductType) -> bool {
        self.entries.contains_key(&product_type)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by product type.
    pub fn iter(&self) -> impl Iterator<Item = &ProductEntry> {
        self.entries.values()
    }

    pub fn product_types(&self) -> impl Iterator<Item = ProductType> + '_ {
        self.entries.keys().copied()
    }
}

/// The full catalog. Populates it on first call; every call returns the same table.
pub fn all_products() -> &'static ProductCatalog {
    &CATALOG
}

/// Entry for a product type.
pub fn get_product(product_type: ProductType) -> Option<&'static ProductEntry> {
    all_products().get(product_type)
}

/// Entry for a raw carrier code. Unknown codes are `None`, never an error.
pub fn find_product(code: &str) -> Option<&'static ProductEntry> {
    ProductType::from_code(code).and_then(get_product)
}

/// Products that permit `service`.
pub fn products_offering(service: Service) -> impl Iterator<Item = &'static ProductEntry> {
    all_products().iter().filter(move |entry| entry.allows(service))
}
