use crate::modules::entities::core::entity_set::KeyResolveError;
use crate::modules::entities::core::key::EntityKey;
use crate::modules::entities::core::record::EntityRecord;
use crate::shared::core::primitives::{ConcurrencyToken, Fields};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RepositoryError {
    #[error("unknown entity set '{0}'")]
    UnknownEntitySet(String),

    #[error("{entity_set} entity '{key}' not found")]
    NotFound { entity_set: String, key: EntityKey },

    #[error(transparent)]
    InvalidKey(#[from] KeyResolveError),

    #[error("key field '{field}' cannot be changed")]
    ImmutableKeyField { field: String },

    #[error("etag mismatch: expected {expected}, current {actual}")]
    PreconditionFailed {
        expected: ConcurrencyToken,
        actual: ConcurrencyToken,
    },
}

/// Keyed store of entity records, one table per configured entity set.
#[async_trait]
pub trait EntityRepository: Send + Sync {
    /// Stores a record, generating the business identifier and filling
    /// defaults first. A colliding key replaces the stored record.
    async fn insert(&self, entity_set: &str, fields: Fields) -> Result<EntityRecord, RepositoryError>;

    async fn get(&self, entity_set: &str, key: &EntityKey) -> Result<EntityRecord, RepositoryError>;

    /// All records in insertion order.
    async fn list(&self, entity_set: &str) -> Result<Vec<EntityRecord>, RepositoryError>;

    /// Merges `changes` into the stored record and rotates its token. When
    /// `expected` is given it must match the stored token.
    async fn update(
        &self,
        entity_set: &str,
        key: &EntityKey,
        changes: Fields,
        expected: Option<&ConcurrencyToken>,
    ) -> Result<EntityRecord, RepositoryError>;

    async fn count(&self, entity_set: &str) -> Result<usize, RepositoryError>;
}
