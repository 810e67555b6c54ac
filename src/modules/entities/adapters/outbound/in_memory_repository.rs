// In memory implementation of the EntityRepository port.
//
// Responsibilities
// - Keep one table per configured entity set, in insertion order.
// - Serialize identifier generation with the insert that uses it, so
//   concurrent inserts without an identifier never collide.
// - Merge partial updates and rotate the concurrency token on every write.

use crate::modules::entities::core::catalog::EntityCatalog;
use crate::modules::entities::core::entity_set::EntitySetConfig;
use crate::modules::entities::core::key::EntityKey;
use crate::modules::entities::core::ports::{EntityRepository, RepositoryError};
use crate::modules::entities::core::record::EntityRecord;
use crate::shared::core::primitives::{ConcurrencyToken, ETAG_FIELD, FieldValue, Fields};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct EntityTable {
    records: Vec<EntityRecord>,
    index: HashMap<EntityKey, usize>,
}

impl EntityTable {
    fn get(&self, key: &EntityKey) -> Option<&EntityRecord> {
        self.index.get(key).map(|&position| &self.records[position])
    }

    fn contains(&self, key: &EntityKey) -> bool {
        self.index.contains_key(key)
    }

    /// Replaces in place when the key exists, so listing order is kept.
    fn upsert(&mut self, key: EntityKey, record: EntityRecord) -> bool {
        match self.index.get(&key) {
            Some(&position) => {
                self.records[position] = record;
                true
            }
            None => {
                self.index.insert(key, self.records.len());
                self.records.push(record);
                false
            }
        }
    }
}

struct EntitySetStore {
    config: EntitySetConfig,
    table: RwLock<EntityTable>,
}

pub struct InMemoryEntityRepository {
    sets: HashMap<String, EntitySetStore>,
}

impl InMemoryEntityRepository {
    pub fn new(configs: impl IntoIterator<Item = EntitySetConfig>) -> Self {
        let sets = configs
            .into_iter()
            .map(|config| {
                (
                    config.name.clone(),
                    EntitySetStore {
                        config,
                        table: RwLock::new(EntityTable::default()),
                    },
                )
            })
            .collect();
        Self { sets }
    }

    pub fn from_catalog(catalog: &EntityCatalog) -> Self {
        Self::new(catalog.entity_sets.iter().cloned())
    }

    fn store(&self, entity_set: &str) -> Result<&EntitySetStore, RepositoryError> {
        self.sets
            .get(entity_set)
            .ok_or_else(|| RepositoryError::UnknownEntitySet(entity_set.to_string()))
    }
}

/// Fills the identifier and defaults. A generated identifier starts at
/// `len + 1` and skips ordinals whose key is already taken.
fn materialize(
    config: &EntitySetConfig,
    table: &EntityTable,
    fields: Fields,
) -> Result<(EntityKey, Fields), RepositoryError> {
    if !config.identifier.is_missing(&fields) {
        let mut fields = fields;
        config.apply_defaults(&mut fields);
        let key = config.key_of(&fields)?;
        return Ok((key, fields));
    }

    let mut ordinal = table.records.len() + 1;
    loop {
        let mut candidate = fields.clone();
        candidate.insert(
            config.identifier.field.clone(),
            FieldValue::Text(config.identifier.format(ordinal)),
        );
        config.apply_defaults(&mut candidate);
        let key = config.key_of(&candidate)?;
        if !table.contains(&key) {
            return Ok((key, candidate));
        }
        ordinal += 1;
    }
}

#[async_trait::async_trait]
impl EntityRepository for InMemoryEntityRepository {
    async fn insert(&self, entity_set: &str, mut fields: Fields) -> Result<EntityRecord, RepositoryError> {
        let store = self.store(entity_set)?;
        fields.remove(ETAG_FIELD);

        let mut table = store.table.write().await;
        let (key, fields) = materialize(&store.config, &table, fields)?;
        let record = EntityRecord::new(fields);
        let replaced = table.upsert(key.clone(), record.clone());

        tracing::debug!(entity_set, key = %key, replaced, "inserted entity");
        Ok(record)
    }

    async fn get(&self, entity_set: &str, key: &EntityKey) -> Result<EntityRecord, RepositoryError> {
        let store = self.store(entity_set)?;
        let table = store.table.read().await;
        table
            .get(key)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound {
                entity_set: entity_set.to_string(),
                key: key.clone(),
            })
    }

    async fn list(&self, entity_set: &str) -> Result<Vec<EntityRecord>, RepositoryError> {
        let store = self.store(entity_set)?;
        Ok(store.table.read().await.records.clone())
    }

    async fn update(
        &self,
        entity_set: &str,
        key: &EntityKey,
        mut changes: Fields,
        expected: Option<&ConcurrencyToken>,
    ) -> Result<EntityRecord, RepositoryError> {
        let store = self.store(entity_set)?;
        changes.remove(ETAG_FIELD);

        let mut table = store.table.write().await;
        let current = table.get(key).ok_or_else(|| RepositoryError::NotFound {
            entity_set: entity_set.to_string(),
            key: key.clone(),
        })?;

        if let Some(expected) = expected
            && *expected != current.token
        {
            return Err(RepositoryError::PreconditionFailed {
                expected: expected.clone(),
                actual: current.token.clone(),
            });
        }

        if let Some((field, _)) = changes.iter().find(|(field, value)| {
            store.config.is_key_field(field) && current.fields.get(*field) != Some(*value)
        }) {
            return Err(RepositoryError::ImmutableKeyField {
                field: field.clone(),
            });
        }

        let mut updated = current.clone();
        updated.fields.extend(changes);
        updated.token = ConcurrencyToken::generate();
        table.upsert(key.clone(), updated.clone());

        tracing::debug!(entity_set, key = %key, "updated entity");
        Ok(updated)
    }

    async fn count(&self, entity_set: &str) -> Result<usize, RepositoryError> {
        let store = self.store(entity_set)?;
        Ok(store.table.read().await.records.len())
    }
}
