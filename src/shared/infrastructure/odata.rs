use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::entities::core::ports::RepositoryError;
use crate::shared::core::key_predicate::KeyPredicateError;

/// Listing envelope: `{"@odata.context", "value", "@odata.count"}`.
#[derive(Debug, Serialize)]
pub struct ODataCollection<T> {
    #[serde(rename = "@odata.context")]
    pub context: String,
    pub value: Vec<T>,
    #[serde(rename = "@odata.count", skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

/// `<base>/$metadata`, optionally followed by `#<fragment>`.
pub fn context_url(base: &str, fragment: Option<&str>) -> String {
    let base = base.trim_end_matches('/');
    match fragment {
        Some(fragment) => format!("{base}/$metadata#{fragment}"),
        None => format!("{base}/$metadata"),
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

pub fn repository_error_response(error: &RepositoryError) -> Response {
    let status = match error {
        RepositoryError::UnknownEntitySet(_) | RepositoryError::NotFound { .. } => {
            StatusCode::NOT_FOUND
        }
        RepositoryError::InvalidKey(_) | RepositoryError::ImmutableKeyField { .. } => {
            StatusCode::BAD_REQUEST
        }
        RepositoryError::PreconditionFailed { .. } => StatusCode::PRECONDITION_FAILED,
    };
    error_response(status, error.to_string())
}

pub fn key_predicate_error_response(error: &KeyPredicateError) -> Response {
    error_response(StatusCode::BAD_REQUEST, error.to_string())
}

#[cfg(test)]
mod odata_envelope_tests {
    use super::*;
    use crate::modules::entities::core::key::EntityKey;
    use crate::shared::core::primitives::ConcurrencyToken;
    use rstest::rstest;

    #[rstest]
    #[case("https://host/data", None, "https://host/data/$metadata")]
    #[case("https://host/data/", Some("VendorsV2"), "https://host/data/$metadata#VendorsV2")]
    fn it_should_build_context_urls(
        #[case] base: &str,
        #[case] fragment: Option<&str>,
        #[case] expected: &str,
    ) {
        assert_eq!(context_url(base, fragment), expected);
    }

    #[rstest]
    fn it_should_omit_a_missing_count() {
        let envelope = ODataCollection::<u8> {
            context: "ctx".into(),
            value: vec![],
            count: None,
        };
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json, serde_json::json!({"@odata.context": "ctx", "value": []}));
    }

    #[rstest]
    #[case(RepositoryError::UnknownEntitySet("X".into()), StatusCode::NOT_FOUND)]
    #[case(
        RepositoryError::NotFound { entity_set: "X".into(), key: EntityKey::new(["1"]) },
        StatusCode::NOT_FOUND
    )]
    #[case(RepositoryError::ImmutableKeyField { field: "Id".into() }, StatusCode::BAD_REQUEST)]
    #[case(
        RepositoryError::PreconditionFailed {
            expected: ConcurrencyToken::generate(),
            actual: ConcurrencyToken::generate(),
        },
        StatusCode::PRECONDITION_FAILED
    )]
    fn it_should_map_repository_errors_to_statuses(
        #[case] error: RepositoryError,
        #[case] expected: StatusCode,
    ) {
        assert_eq!(repository_error_response(&error).status(), expected);
    }
}
