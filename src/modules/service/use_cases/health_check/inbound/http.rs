use axum::{Json, extract::State};
use chrono::Utc;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::shell::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub timestamp: String,
    pub version: &'static str,
    /// Record count per writable entity set.
    pub endpoints: BTreeMap<String, usize>,
}

pub async fn handle(State(state): State<AppState>) -> Json<HealthReport> {
    let mut endpoints = BTreeMap::new();
    for config in &state.catalog.entity_sets {
        match state.repository.count(&config.name).await {
            Ok(count) => {
                endpoints.insert(config.name.clone(), count);
            }
            Err(error) => tracing::warn!(entity_set = %config.name, %error, "health count failed"),
        }
    }

    Json(HealthReport {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION"),
        endpoints,
    })
}
