use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::shared::core::key_predicate::parse_resource_segment;
use crate::shared::infrastructure::odata::{
    error_response, key_predicate_error_response, repository_error_response,
};
use crate::shell::state::AppState;

/// `GET /{Set}/$count`, answered as plain text.
pub async fn handle(State(state): State<AppState>, Path(resource): Path<String>) -> Response {
    let segment = match parse_resource_segment(&resource) {
        Ok(segment) => segment,
        Err(error) => return key_predicate_error_response(&error),
    };
    if segment.predicate.is_some() {
        return error_response(StatusCode::BAD_REQUEST, "$count applies to a collection");
    }

    if let Some(reference) = state.catalog.reference_set(&segment.entity_set) {
        return reference.records.len().to_string().into_response();
    }
    match state.repository.count(&segment.entity_set).await {
        Ok(count) => count.to_string().into_response(),
        Err(error) => repository_error_response(&error),
    }
}
