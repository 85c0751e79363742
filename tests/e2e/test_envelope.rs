use crate::e2e::helpers;

use helpers::assertions::assert_error_envelope;
use helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use simple_api::ApiResponse;
use std::collections::HashSet;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_not_write_status_code_into_the_body(ctx: &TestContext) {
    let response = ctx.client.get("/v1/users/999").await.unwrap();

    response.assert_status(StatusCode::NOT_FOUND);
    assert!(response.json().get("status_code").is_none());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_generate_a_fresh_debug_id_per_error(ctx: &TestContext) {
    let mut seen = HashSet::new();

    for _ in 0..5 {
        let response = ctx.client.get("/v1/users/999").await.unwrap();
        let error = assert_error_envelope(response.json(), "OBJECT_NOT_FOUND_ERROR");
        let debug_id = error["debug_id"].as_str().unwrap().to_string();

        assert!(debug_id.starts_with("user-"));
        assert!(seen.insert(debug_id), "debug_id repeated");
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_parse_back_into_an_equal_envelope(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/v1/users",
            &json!({"name": "Ada", "email": "ada@example.com"}),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::CREATED);

    let body = response.json();
    let parsed: ApiResponse = serde_json::from_value(body.clone()).unwrap();
    assert!(parsed.success);

    let reserialized = serde_json::to_value(&parsed).unwrap();
    assert_eq!(&reserialized, body);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_processing_error_for_malformed_json(ctx: &TestContext) {
    let response = ctx.client.post_raw("/v1/users", "{not json").await.unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);

    let body = response.json();
    let error = assert_error_envelope(body, "PROCESSING_ERROR");
    assert_eq!(
        body["message"],
        json!("Processing could not be completed due to an error.")
    );

    assert_eq!(
        error["details"][0]["issues"],
        json!(["The request body must be a valid JSON document matching the expected fields."])
    );
    assert!(error["details"][0]["field"].is_null());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_keep_deserializer_text_off_the_wire(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/v1/users", &json!({"name": 5, "email": "a@b.c"}))
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);

    let body = response.json();
    let error = assert_error_envelope(body, "PROCESSING_ERROR");
    let text = body.to_string();
    assert!(!text.contains("deserialize"), "Raw rejection leaked: {}", text);
    assert!(!text.contains("invalid type"), "Raw rejection leaked: {}", text);
    assert_eq!(
        error["details"][0]["issues"],
        json!(["The request body must be a valid JSON document matching the expected fields."])
    );
}
