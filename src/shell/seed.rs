use crate::modules::entities::core::ports::{EntityRepository, RepositoryError};
use crate::shared::core::primitives::{FieldValue, Fields};

fn fields<const N: usize>(pairs: [(&str, FieldValue); N]) -> Fields {
    pairs
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

fn sample_data() -> Vec<(&'static str, Fields)> {
    vec![
        (
            "VendorsV2",
            fields([
                ("dataAreaId", "USMF".into()),
                ("VendorAccount", "V000001".into()),
                ("OrganizationName", "Contoso Electronics".into()),
                ("VendorGroupId", "10".into()),
            ]),
        ),
        (
            "VendorsV2",
            fields([
                ("dataAreaId", "USMF".into()),
                ("VendorAccount", "V000002".into()),
                ("OrganizationName", "Fabrikam Supplies".into()),
                ("VendorGroupId", "20".into()),
            ]),
        ),
        (
            "CustomersV3",
            fields([
                ("dataAreaId", "USMF".into()),
                ("CustomerAccount", "C000001".into()),
                ("OrganizationName", "Adventure Works".into()),
                ("NameAlias", "AWorks".into()),
                ("CustomerGroupId", "10".into()),
                ("CreditLimit", FieldValue::Float(50000.0)),
            ]),
        ),
        (
            "CustomersV3",
            fields([
                ("dataAreaId", "USMF".into()),
                ("CustomerAccount", "C000002".into()),
                ("OrganizationName", "Blue Yonder Airlines".into()),
                ("NameAlias", "BlueYonder".into()),
                ("CustomerGroupId", "20".into()),
                ("CreditLimit", FieldValue::Float(100000.0)),
            ]),
        ),
        (
            "SystemUsers",
            fields([("UserId", "ADMIN".into()), ("UserName", "admin".into())]),
        ),
        (
            "SystemUsers",
            fields([("UserId", "USER001".into()), ("UserName", "testuser".into())]),
        ),
    ]
}

/// Loads the sample vendors, customers and users through the normal insert
/// path, so defaults and tokens are applied exactly as for client writes.
pub async fn seed_sample_data(repository: &dyn EntityRepository) -> Result<usize, RepositoryError> {
    let mut inserted = 0;
    for (entity_set, record) in sample_data() {
        repository.insert(entity_set, record).await?;
        inserted += 1;
    }
    tracing::info!(inserted, "seeded sample data");
    Ok(inserted)
}
