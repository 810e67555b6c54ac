use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::shell::http::router;
use crate::tests::fixtures::state::make_test_state;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn creates_lists_and_updates_a_customer() {
    let app = router(make_test_state());

    let (status, created) = send(
        &app,
        json_request(
            "POST",
            "/CustomersV3",
            r#"{"dataAreaId":"USMF","OrganizationName":"Acme"}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["CustomerAccount"], "C000001");
    assert_eq!(created["IsActive"], true);
    assert_eq!(created["SalesCurrencyCode"], "USD");
    let insert_token = created["@odata.etag"].as_str().unwrap().to_string();

    let (status, listing) = send(
        &app,
        Request::get("/CustomersV3?$top=1").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listing["@odata.count"], 1);
    assert_eq!(listing["value"].as_array().unwrap().len(), 1);
    assert_eq!(listing["value"][0], created);

    let (status, updated) = send(
        &app,
        json_request(
            "PATCH",
            "/CustomersV3(dataAreaId='USMF',CustomerAccount='C000001')",
            r#"{"CreditLimit":25000.0}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["CreditLimit"], 25000.0);
    assert_eq!(updated["OrganizationName"], "Acme");
    assert_ne!(updated["@odata.etag"], insert_token.as_str());

    let (status, fetched) = send(
        &app,
        Request::get("/CustomersV3(CustomerAccount='C000001',dataAreaId='USMF')")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, updated);
}
