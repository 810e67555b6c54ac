use crate::modules::entities::core::entity_set::{EntitySetConfig, FieldDefault, IdentifierRule};
use crate::modules::entities::core::record::EntityRecord;
use crate::shared::core::primitives::{FieldValue, Fields};

pub const SCHEMA_NAMESPACE: &str = "Microsoft.Dynamics365.Finance";

/// Fixed, read-only entity set. Rows are built once and never rotate their
/// tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceSet {
    pub name: String,
    pub entity_type: String,
    pub records: Vec<EntityRecord>,
}

/// Every entity set the server exposes, writable and read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCatalog {
    pub entity_sets: Vec<EntitySetConfig>,
    pub reference_sets: Vec<ReferenceSet>,
}

impl EntityCatalog {
    pub fn new(entity_sets: Vec<EntitySetConfig>, reference_sets: Vec<ReferenceSet>) -> Self {
        Self {
            entity_sets,
            reference_sets,
        }
    }

    /// Vendors, customers, system users and the exchange-rate table.
    pub fn finance() -> Self {
        Self::new(
            vec![vendors(), customers(), system_users()],
            vec![exchange_rates()],
        )
    }

    pub fn entity_set(&self, name: &str) -> Option<&EntitySetConfig> {
        self.entity_sets.iter().find(|set| set.name == name)
    }

    pub fn reference_set(&self, name: &str) -> Option<&ReferenceSet> {
        self.reference_sets.iter().find(|set| set.name == name)
    }

    /// `(entity set, entity type)` pairs in declaration order.
    pub fn describe(&self) -> Vec<(&str, &str)> {
        self.entity_sets
            .iter()
            .map(|set| (set.name.as_str(), set.entity_type.as_str()))
            .chain(
                self.reference_sets
                    .iter()
                    .map(|set| (set.name.as_str(), set.entity_type.as_str())),
            )
            .collect()
    }
}

fn vendors() -> EntitySetConfig {
    EntitySetConfig::new(
        "VendorsV2",
        "VendorV2",
        &["dataAreaId", "VendorAccount"],
        IdentifierRule::new("VendorAccount", "V", 6),
    )
    .with_constant("dataAreaId", "USMF")
    .with_constant("OrganizationName", "")
    .with_constant("VendorGroupId", "10")
    .with_constant("AddressCountryRegionId", "US")
    .with_constant("PurchaseCurrencyCode", "USD")
    .with_constant("IsActive", true)
}

fn customers() -> EntitySetConfig {
    EntitySetConfig::new(
        "CustomersV3",
        "CustomerV3",
        &["dataAreaId", "CustomerAccount"],
        IdentifierRule::new("CustomerAccount", "C", 6),
    )
    .with_constant("dataAreaId", "USMF")
    .with_constant("OrganizationName", "")
    .with_constant("NameAlias", "")
    .with_constant("CustomerGroupId", "10")
    .with_constant("AddressCountryRegionId", "US")
    .with_constant("SalesCurrencyCode", "USD")
    .with_constant("PersonGender", "Unknown")
    .with_constant("CreditLimit", 0.0)
    .with_constant("IsActive", true)
}

fn system_users() -> EntitySetConfig {
    EntitySetConfig::new(
        "SystemUsers",
        "SystemUser",
        &["UserId"],
        IdentifierRule::new("UserId", "USER", 4),
    )
    .with_default("UserName", FieldDefault::CopyOf("UserId".into()))
    .with_default(
        "Email",
        FieldDefault::LowercaseEmail {
            from: "UserId".into(),
            domain: "company.com".into(),
        },
    )
    .with_constant("IsActive", true)
}

fn exchange_rates() -> ReferenceSet {
    let rate = |from: &str, to: &str, value: f64| {
        EntityRecord::new(Fields::from([
            ("FromCurrencyCode".to_string(), FieldValue::from(from)),
            ("ToCurrencyCode".to_string(), FieldValue::from(to)),
            ("ExchangeRateValue".to_string(), FieldValue::from(value)),
            (
                "ValidFromDate".to_string(),
                FieldValue::from("2025-01-01T00:00:00Z"),
            ),
            ("RateTypeId".to_string(), FieldValue::from("SPOT")),
        ]))
    };

    ReferenceSet {
        name: "ExchangeRates".into(),
        entity_type: "ExchangeRate".into(),
        records: vec![
            rate("USD", "EUR", 0.85),
            rate("USD", "GBP", 0.75),
            rate("EUR", "USD", 1.18),
            rate("GBP", "USD", 1.33),
        ],
    }
}
