use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::entities::adapters::inbound::http::read_only_response;
use crate::shared::core::key_predicate::parse_resource_segment;
use crate::shared::core::primitives::Fields;
use crate::shared::infrastructure::odata::{
    error_response, key_predicate_error_response, repository_error_response,
};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(resource): Path<String>,
    body: Result<Json<Fields>, JsonRejection>,
) -> Response {
    let segment = match parse_resource_segment(&resource) {
        Ok(segment) => segment,
        Err(error) => return key_predicate_error_response(&error),
    };
    if segment.predicate.is_some() {
        return error_response(
            StatusCode::METHOD_NOT_ALLOWED,
            "POST targets a collection, not a keyed entity",
        );
    }
    if state.catalog.reference_set(&segment.entity_set).is_some() {
        return read_only_response(&segment.entity_set);
    }

    let Json(fields) = match body {
        Ok(body) => body,
        Err(rejection) => {
            return error_response(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text());
        }
    };

    match state.repository.insert(&segment.entity_set, fields).await {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(error) => repository_error_response(&error),
    }
}
