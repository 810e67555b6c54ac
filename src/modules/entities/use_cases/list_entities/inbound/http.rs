use axum::{
    Json,
    response::{IntoResponse, Response},
};
use std::collections::HashMap;

use crate::modules::entities::core::query::QueryOptions;
use crate::modules::entities::use_cases::list_entities::handler::list_entities;
use crate::shared::infrastructure::odata::{ODataCollection, repository_error_response};
use crate::shell::state::AppState;

pub async fn respond(
    state: &AppState,
    entity_set: &str,
    params: &HashMap<String, String>,
) -> Response {
    let options = QueryOptions::from_params(params);
    match list_entities(&*state.repository, &state.catalog, entity_set, &options).await {
        Ok(page) => Json(ODataCollection {
            context: state.context_url(Some(entity_set)),
            value: page.records,
            count: Some(page.count),
        })
        .into_response(),
        Err(error) => repository_error_response(&error),
    }
}
