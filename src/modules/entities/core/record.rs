use crate::shared::core::primitives::{ConcurrencyToken, ETAG_FIELD, FieldValue, Fields};
use serde::{Deserialize, Serialize};

/// A stored entity: open field map plus the concurrency token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    #[serde(rename = "@odata.etag")]
    pub token: ConcurrencyToken,
    #[serde(flatten)]
    pub fields: Fields,
}

impl EntityRecord {
    /// Builds a record with a freshly generated token. Any incoming
    /// `@odata.etag` entry is discarded.
    pub fn new(mut fields: Fields) -> Self {
        fields.remove(ETAG_FIELD);
        Self {
            token: ConcurrencyToken::generate(),
            fields,
        }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// Copy of the record limited to `names` that exist on it. The token is
    /// always carried through.
    pub fn project<I, S>(&self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fields = names
            .into_iter()
            .filter_map(|name| {
                let name = name.as_ref();
                self.fields
                    .get(name)
                    .map(|value| (name.to_string(), value.clone()))
            })
            .collect();
        Self {
            token: self.token.clone(),
            fields,
        }
    }
}

#[cfg(test)]
mod entity_record_tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn vendor() -> EntityRecord {
        EntityRecord::new(Fields::from([
            ("dataAreaId".to_string(), FieldValue::from("USMF")),
            ("VendorAccount".to_string(), FieldValue::from("V000001")),
            ("OrganizationName".to_string(), FieldValue::from("Contoso")),
            ("IsActive".to_string(), FieldValue::from(true)),
        ]))
    }

    #[rstest]
    fn it_should_drop_a_client_supplied_etag() {
        let record = EntityRecord::new(Fields::from([(
            ETAG_FIELD.to_string(),
            FieldValue::from("W/\"client\""),
        )]));
        assert!(record.fields.is_empty());
        assert_ne!(record.token.as_str(), "W/\"client\"");
    }

    #[rstest]
    fn it_should_project_existing_fields_and_keep_the_token(vendor: EntityRecord) {
        let projected = vendor.project(["VendorAccount", "Missing"]);
        assert_eq!(projected.token, vendor.token);
        assert_eq!(projected.fields.len(), 1);
        assert_eq!(
            projected.get("VendorAccount"),
            Some(&FieldValue::from("V000001"))
        );
    }

    #[rstest]
    fn it_should_serialize_the_token_as_odata_etag(vendor: EntityRecord) {
        let json = serde_json::to_value(&vendor).unwrap();
        assert_eq!(json[ETAG_FIELD], vendor.token.as_str());
        assert_eq!(json["OrganizationName"], "Contoso");
        assert_eq!(json["IsActive"], true);
    }
}
