use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, header::IF_MATCH},
    response::{IntoResponse, Response},
};

use crate::modules::entities::adapters::inbound::http::{parse_keyed_segment, resolve_key};
use crate::shared::core::primitives::{ConcurrencyToken, Fields};
use crate::shared::infrastructure::odata::{error_response, repository_error_response};
use crate::shell::state::AppState;

/// `If-Match` as an optional precondition. `*` or no header skips the check.
fn precondition(headers: &HeaderMap) -> Option<ConcurrencyToken> {
    headers
        .get(IF_MATCH)
        .and_then(|value| value.to_str().ok())
        .filter(|value| value.trim() != "*")
        .and_then(ConcurrencyToken::parse)
}

pub async fn handle(
    State(state): State<AppState>,
    Path(resource): Path<String>,
    headers: HeaderMap,
    body: Result<Json<Fields>, JsonRejection>,
) -> Response {
    let (entity_set, predicate) = match parse_keyed_segment(&resource) {
        Ok(target) => target,
        Err(response) => return response,
    };
    let key = match resolve_key(&state, &entity_set, &predicate) {
        Ok(key) => key,
        Err(response) => return response,
    };

    let Json(changes) = match body {
        Ok(body) => body,
        Err(rejection) => {
            return error_response(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text());
        }
    };

    let expected = precondition(&headers);
    match state
        .repository
        .update(&entity_set, &key, changes, expected.as_ref())
        .await
    {
        Ok(record) => Json(record).into_response(),
        Err(error) => repository_error_response(&error),
    }
}
