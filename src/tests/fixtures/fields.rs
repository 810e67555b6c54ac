use crate::shared::core::primitives::{FieldValue, Fields};

/// Builds request bodies for repository and handler tests.
#[derive(Default)]
pub struct FieldsBuilder {
    inner: Fields,
}

impl FieldsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.inner.insert(field.into(), value.into());
        self
    }

    pub fn build(self) -> Fields {
        self.inner
    }
}

#[cfg(test)]
mod fields_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_collect_fields_and_let_later_values_win() {
        let fields = FieldsBuilder::new()
            .with("OrganizationName", "first")
            .with("OrganizationName", "second")
            .with("CreditLimit", 10.5)
            .build();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields["OrganizationName"], FieldValue::from("second"));
        assert_eq!(fields["CreditLimit"], FieldValue::Float(10.5));
    }
}
