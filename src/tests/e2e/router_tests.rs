use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::shell::http::router;
use crate::shell::seed::seed_sample_data;
use crate::tests::fixtures::state::make_test_state;

async fn seeded_app() -> Router {
    let state = make_test_state();
    seed_sample_data(&*state.repository).await.unwrap();
    router(state)
}

async fn get_text(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn serves_static_routes_ahead_of_entity_sets() {
    let app = seeded_app().await;

    let (status, body) = get_text(&app, "/data").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("\"kind\":\"EntitySet\""));

    let (status, body) = get_text(&app, "/$metadata").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("EntityContainer"));

    let (status, body) = get_text(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("\"VendorsV2\":2"));
}

#[tokio::test]
async fn counts_grow_after_a_vendor_is_created() {
    let app = seeded_app().await;
    let (_, before) = get_text(&app, "/VendorsV2/$count").await;
    assert_eq!(before, "2");

    let response = app
        .clone()
        .oneshot(
            Request::post("/VendorsV2")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"OrganizationName":"Test Vendor Corp"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let (_, after) = get_text(&app, "/VendorsV2/$count").await;
    assert_eq!(after, "3");

    let (status, body) = get_text(&app, "/VendorsV2?$skip=2").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("\"VendorAccount\":\"V000003\""));
}

#[tokio::test]
async fn reports_the_full_count_when_skipping_past_the_end() {
    let app = seeded_app().await;
    let (status, body) = get_text(&app, "/SystemUsers?$skip=10&$top=5").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["value"], serde_json::json!([]));
    assert_eq!(json["@odata.count"], 2);
}

#[tokio::test]
async fn answers_cors_preflight_requests() {
    let app = seeded_app().await;
    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/CustomersV3")
                .header(header::ORIGIN, "http://localhost:3000")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PATCH")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
    );
}
