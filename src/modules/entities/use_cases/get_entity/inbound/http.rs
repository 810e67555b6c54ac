use axum::{
    Json,
    response::{IntoResponse, Response},
};

use crate::modules::entities::adapters::inbound::http::resolve_key;
use crate::shared::core::key_predicate::KeyPredicate;
use crate::shared::infrastructure::odata::repository_error_response;
use crate::shell::state::AppState;

pub async fn respond(state: &AppState, entity_set: &str, predicate: &KeyPredicate) -> Response {
    let key = match resolve_key(state, entity_set, predicate) {
        Ok(key) => key,
        Err(response) => return response,
    };

    match state.repository.get(entity_set, &key).await {
        Ok(record) => Json(record).into_response(),
        Err(error) => repository_error_response(&error),
    }
}
