use axum::{
    Json,
    extract::State,
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::entities::core::catalog::{EntityCatalog, SCHEMA_NAMESPACE};
use crate::shared::infrastructure::odata::ODataCollection;
use crate::shell::state::AppState;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct EntitySetEntry {
    pub name: String,
    pub kind: &'static str,
    pub url: String,
}

/// `GET /data`: the OData service document.
pub async fn service_root(State(state): State<AppState>) -> Json<ODataCollection<EntitySetEntry>> {
    let value = state
        .catalog
        .describe()
        .into_iter()
        .map(|(name, _)| EntitySetEntry {
            name: name.to_string(),
            kind: "EntitySet",
            url: name.to_string(),
        })
        .collect();

    Json(ODataCollection {
        context: state.context_url(None),
        value,
        count: None,
    })
}

/// `GET /$metadata`: a minimal EDMX document listing the entity container.
pub async fn metadata(State(state): State<AppState>) -> Response {
    (
        [(CONTENT_TYPE, "application/xml")],
        render_metadata(&state.catalog),
    )
        .into_response()
}

pub fn render_metadata(catalog: &EntityCatalog) -> String {
    let entity_sets: String = catalog
        .describe()
        .into_iter()
        .map(|(name, entity_type)| {
            format!(
                "        <EntitySet Name=\"{name}\" EntityType=\"{SCHEMA_NAMESPACE}.{entity_type}\"/>\n"
            )
        })
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<edmx:Edmx xmlns:edmx="http://docs.oasis-open.org/odata/ns/edmx" Version="4.0">
  <edmx:DataServices>
    <Schema xmlns="http://docs.oasis-open.org/odata/ns/edm" Namespace="{SCHEMA_NAMESPACE}">
      <EntityContainer Name="Container">
{entity_sets}      </EntityContainer>
    </Schema>
  </edmx:DataServices>
</edmx:Edmx>"#
    )
}
