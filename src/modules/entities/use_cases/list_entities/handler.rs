use crate::modules::entities::core::catalog::EntityCatalog;
use crate::modules::entities::core::ports::{EntityRepository, RepositoryError};
use crate::modules::entities::core::query::{self, QueryOptions, QueryPage};

/// Lists a writable set from the repository, or a read-only set from the
/// catalog, and runs the result through the query processor.
pub async fn list_entities(
    repository: &dyn EntityRepository,
    catalog: &EntityCatalog,
    entity_set: &str,
    options: &QueryOptions,
) -> Result<QueryPage, RepositoryError> {
    let listing = match catalog.reference_set(entity_set) {
        Some(reference) => reference.records.clone(),
        None => repository.list(entity_set).await?,
    };
    Ok(query::apply(listing, options))
}

#[cfg(test)]
mod list_entities_handler_tests {
    use super::*;
    use crate::modules::entities::adapters::outbound::in_memory_repository::InMemoryEntityRepository;
    use crate::shared::core::primitives::FieldValue;
    use crate::tests::fixtures::fields::FieldsBuilder;
    use rstest::{fixture, rstest};

    #[fixture]
    fn catalog() -> EntityCatalog {
        EntityCatalog::finance()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_page_a_repository_backed_set(catalog: EntityCatalog) {
        let repository = InMemoryEntityRepository::from_catalog(&catalog);
        for name in ["a", "b", "c"] {
            repository
                .insert("VendorsV2", FieldsBuilder::new().with("OrganizationName", name).build())
                .await
                .unwrap();
        }
        let options = QueryOptions {
            skip: 1,
            top: Some(1),
            ..QueryOptions::default()
        };

        let page = list_entities(&repository, &catalog, "VendorsV2", &options)
            .await
            .unwrap();

        assert_eq!(page.count, 3);
        assert_eq!(page.records.len(), 1);
        assert_eq!(page.records[0].get("OrganizationName"), Some(&FieldValue::from("b")));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_page_and_project_the_reference_set(catalog: EntityCatalog) {
        let repository = InMemoryEntityRepository::from_catalog(&catalog);
        let options = QueryOptions {
            top: Some(2),
            select: Some(vec!["ToCurrencyCode".into()]),
            ..QueryOptions::default()
        };

        let page = list_entities(&repository, &catalog, "ExchangeRates", &options)
            .await
            .unwrap();

        assert_eq!(page.count, 4);
        assert_eq!(page.records.len(), 2);
        assert_eq!(page.records[1].get("ToCurrencyCode"), Some(&FieldValue::from("GBP")));
        assert!(page.records[1].get("FromCurrencyCode").is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_for_unknown_sets(catalog: EntityCatalog) {
        let repository = InMemoryEntityRepository::from_catalog(&catalog);
        let result = list_entities(&repository, &catalog, "Nope", &QueryOptions::default()).await;
        assert_eq!(result.unwrap_err(), RepositoryError::UnknownEntitySet("Nope".into()));
    }
}
