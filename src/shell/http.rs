use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::entities::adapters::inbound::http as entities_http;
use crate::modules::entities::use_cases::count_entities::inbound::http as count_http;
use crate::modules::entities::use_cases::create_entity::inbound::http as create_http;
use crate::modules::entities::use_cases::update_entity::inbound::http as update_http;
use crate::modules::service::use_cases::describe_service::inbound::http as describe_http;
use crate::modules::service::use_cases::health_check::inbound::http as health_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/data", get(describe_http::service_root))
        .route("/$metadata", get(describe_http::metadata))
        .route("/health", get(health_http::handle))
        .route(
            "/{resource}",
            get(entities_http::read)
                .post(create_http::handle)
                .patch(update_http::handle),
        )
        .route("/{resource}/$count", get(count_http::handle))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
