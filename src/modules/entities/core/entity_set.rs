use crate::modules::entities::core::key::EntityKey;
use crate::shared::core::key_predicate::KeyPredicate;
use crate::shared::core::primitives::{FieldValue, Fields};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyResolveError {
    #[error("key field '{field}' is missing")]
    MissingField { field: String },

    #[error("'{field}' is not a key field of {entity_set}")]
    UnknownField { entity_set: String, field: String },

    #[error("{entity_set} has a composite key; name every key field")]
    PositionalOnCompositeKey { entity_set: String },
}

/// How a missing business identifier is generated: `prefix` followed by the
/// 1-based ordinal zero-padded to `width` digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierRule {
    pub field: String,
    pub prefix: String,
    pub width: usize,
}

impl IdentifierRule {
    pub fn new(field: impl Into<String>, prefix: impl Into<String>, width: usize) -> Self {
        Self {
            field: field.into(),
            prefix: prefix.into(),
            width,
        }
    }

    pub fn format(&self, ordinal: usize) -> String {
        format!("{}{:0width$}", self.prefix, ordinal, width = self.width)
    }

    pub fn is_missing(&self, fields: &Fields) -> bool {
        fields.get(&self.field).is_none_or(FieldValue::is_blank)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldDefault {
    Constant(FieldValue),
    /// Value of another field on the same record.
    CopyOf(String),
    /// `lowercase(<from>)@<domain>`.
    LowercaseEmail { from: String, domain: String },
}

impl FieldDefault {
    fn resolve(&self, fields: &Fields) -> Option<FieldValue> {
        match self {
            FieldDefault::Constant(value) => Some(value.clone()),
            FieldDefault::CopyOf(from) => fields.get(from).cloned(),
            FieldDefault::LowercaseEmail { from, domain } => {
                fields.get(from).filter(|value| !value.is_blank()).map(|value| {
                    let local = value.to_string().to_lowercase();
                    FieldValue::Text(format!("{local}@{domain}"))
                })
            }
        }
    }
}

/// Per-entity-set contract: key layout, identifier generation and defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct EntitySetConfig {
    pub name: String,
    pub entity_type: String,
    pub key_fields: Vec<String>,
    pub identifier: IdentifierRule,
    pub defaults: Vec<(String, FieldDefault)>,
}

impl EntitySetConfig {
    pub fn new(
        name: impl Into<String>,
        entity_type: impl Into<String>,
        key_fields: &[&str],
        identifier: IdentifierRule,
    ) -> Self {
        Self {
            name: name.into(),
            entity_type: entity_type.into(),
            key_fields: key_fields.iter().map(|f| f.to_string()).collect(),
            identifier,
            defaults: Vec::new(),
        }
    }

    pub fn with_default(mut self, field: impl Into<String>, default: FieldDefault) -> Self {
        self.defaults.push((field.into(), default));
        self
    }

    pub fn with_constant(self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.with_default(field, FieldDefault::Constant(value.into()))
    }

    pub fn is_key_field(&self, field: &str) -> bool {
        self.key_fields.iter().any(|k| k == field)
    }

    /// Fills every field the caller did not supply. Defaults run in declared
    /// order, so later entries may derive from earlier ones.
    pub fn apply_defaults(&self, fields: &mut Fields) {
        for (field, default) in &self.defaults {
            if fields.contains_key(field) {
                continue;
            }
            if let Some(value) = default.resolve(fields) {
                fields.insert(field.clone(), value);
            }
        }
    }

    pub fn key_of(&self, fields: &Fields) -> Result<EntityKey, KeyResolveError> {
        let parts = self
            .key_fields
            .iter()
            .map(|field| {
                fields
                    .get(field)
                    .and_then(EntityKey::component)
                    .ok_or_else(|| KeyResolveError::MissingField {
                        field: field.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(EntityKey::new(parts))
    }

    /// Orders the values of a URL key predicate into this set's key layout.
    pub fn key_from_predicate(
        &self,
        predicate: &KeyPredicate,
    ) -> Result<EntityKey, KeyResolveError> {
        match predicate {
            KeyPredicate::Positional(value) => {
                if self.key_fields.len() != 1 {
                    return Err(KeyResolveError::PositionalOnCompositeKey {
                        entity_set: self.name.clone(),
                    });
                }
                Ok(EntityKey::new([value.clone()]))
            }
            KeyPredicate::Named(pairs) => {
                if let Some((field, _)) =
                    pairs.iter().find(|(field, _)| !self.is_key_field(field))
                {
                    return Err(KeyResolveError::UnknownField {
                        entity_set: self.name.clone(),
                        field: field.clone(),
                    });
                }
                let parts = self
                    .key_fields
                    .iter()
                    .map(|field| {
                        pairs
                            .iter()
                            .find(|(name, _)| name == field)
                            .map(|(_, value)| value.clone())
                            .ok_or_else(|| KeyResolveError::MissingField {
                                field: field.clone(),
                            })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(EntityKey::new(parts))
            }
        }
    }
}
