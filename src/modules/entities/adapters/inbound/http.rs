use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
};
use std::collections::HashMap;

use crate::modules::entities::core::key::EntityKey;
use crate::modules::entities::core::ports::RepositoryError;
use crate::modules::entities::use_cases::get_entity::inbound::http as get_http;
use crate::modules::entities::use_cases::list_entities::inbound::http as list_http;
use crate::shared::core::key_predicate::{KeyPredicate, ResourceSegment, parse_resource_segment};
use crate::shared::infrastructure::odata::{
    error_response, key_predicate_error_response, repository_error_response,
};
use crate::shell::state::AppState;

/// `GET /{Set}` lists, `GET /{Set}(<key>)` reads a single record.
pub async fn read(
    State(state): State<AppState>,
    Path(resource): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let segment = match parse_resource_segment(&resource) {
        Ok(segment) => segment,
        Err(error) => return key_predicate_error_response(&error),
    };

    match segment.predicate {
        None => list_http::respond(&state, &segment.entity_set, &params).await,
        Some(predicate) => get_http::respond(&state, &segment.entity_set, &predicate).await,
    }
}

/// Parses a path segment that must carry a key predicate.
pub fn parse_keyed_segment(resource: &str) -> Result<(String, KeyPredicate), Response> {
    let ResourceSegment {
        entity_set,
        predicate,
    } = parse_resource_segment(resource).map_err(|error| key_predicate_error_response(&error))?;

    match predicate {
        Some(predicate) => Ok((entity_set, predicate)),
        None => Err(error_response(
            StatusCode::METHOD_NOT_ALLOWED,
            format!("{entity_set} requires a key predicate"),
        )),
    }
}

/// Orders the predicate into the set's declared key layout.
pub fn resolve_key(
    state: &AppState,
    entity_set: &str,
    predicate: &KeyPredicate,
) -> Result<EntityKey, Response> {
    if state.catalog.reference_set(entity_set).is_some() {
        return Err(read_only_response(entity_set));
    }
    let config = state.catalog.entity_set(entity_set).ok_or_else(|| {
        repository_error_response(&RepositoryError::UnknownEntitySet(entity_set.to_string()))
    })?;
    config
        .key_from_predicate(predicate)
        .map_err(|error| repository_error_response(&error.into()))
}

pub fn read_only_response(entity_set: &str) -> Response {
    error_response(
        StatusCode::METHOD_NOT_ALLOWED,
        format!("{entity_set} is read-only and has no addressable key"),
    )
}
