use crate::shared::core::primitives::FieldValue;
use std::fmt;

/// Separator used when a composite key is rendered as a single string.
pub const KEY_SEPARATOR: &str = "_";

/// Ordered composite key values, in the entity set's declared key order.
///
/// The store indexes on the tuple itself rather than on the joined string, so
/// `("A_B", "C")` and `("A", "B_C")` stay distinct even though they render the
/// same way.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityKey(Vec<String>);

impl EntityKey {
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(parts.into_iter().map(Into::into).collect())
    }

    pub fn parts(&self) -> &[String] {
        &self.0
    }

    /// Key component form of a field value; blank values yield `None`.
    pub fn component(value: &FieldValue) -> Option<String> {
        if value.is_blank() {
            None
        } else {
            Some(value.to_string())
        }
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(KEY_SEPARATOR))
    }
}

#[cfg(test)]
mod entity_key_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_render_parts_joined_by_the_separator() {
        let key = EntityKey::new(["USMF", "C000001"]);
        assert_eq!(key.to_string(), "USMF_C000001");
    }

    #[rstest]
    fn it_should_keep_keys_with_the_separator_inside_values_distinct() {
        let left = EntityKey::new(["A_B", "C"]);
        let right = EntityKey::new(["A", "B_C"]);
        assert_eq!(left.to_string(), right.to_string());
        assert_ne!(left, right);
    }

    #[rstest]
    #[case(FieldValue::from("V1"), Some("V1"))]
    #[case(FieldValue::Integer(7), Some("7"))]
    #[case(FieldValue::from(""), None)]
    #[case(FieldValue::Null, None)]
    fn it_should_derive_key_components_from_field_values(
        #[case] value: FieldValue,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(EntityKey::component(&value).as_deref(), expected);
    }
}
