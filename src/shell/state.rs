use crate::modules::entities::adapters::outbound::in_memory_repository::InMemoryEntityRepository;
use crate::modules::entities::core::catalog::EntityCatalog;
use crate::modules::entities::core::ports::EntityRepository;
use crate::shared::infrastructure::odata::context_url;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn EntityRepository + Send + Sync>,
    pub catalog: Arc<EntityCatalog>,
    pub context_base: Arc<str>,
}

impl AppState {
    /// Fresh, empty in-memory repository over `catalog`.
    pub fn in_memory(catalog: EntityCatalog, context_base: impl Into<String>) -> Self {
        let repository = Arc::new(InMemoryEntityRepository::from_catalog(&catalog));
        let context_base: String = context_base.into();
        Self {
            repository,
            catalog: Arc::new(catalog),
            context_base: Arc::from(context_base),
        }
    }

    pub fn context_url(&self, fragment: Option<&str>) -> String {
        context_url(&self.context_base, fragment)
    }
}
