#![allow(dead_code)]

use axum::{
    Router,
    body::{self, Body},
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

pub const SECRET: &str = "integration-test-secret";

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("router response");
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&bytes).expect("json body");
    (status, json)
}

pub fn graphql_request(token: Option<&str>, query: &str, variables: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder
        .body(Body::from(
            json!({ "query": query, "variables": variables }).to_string(),
        ))
        .expect("graphql request")
}

/// Posts a GraphQL request and returns its JSON body. GraphQL always answers 200.
pub async fn graphql(app: Router, token: Option<&str>, query: &str, variables: Value) -> Value {
    let (status, body) = send(app, graphql_request(token, query, variables)).await;
    assert_eq!(status, StatusCode::OK, "unexpected status, body: {body}");
    body
}

pub fn error_code(body: &Value) -> &str {
    body["errors"][0]["extensions"]["code"]
        .as_str()
        .unwrap_or_else(|| panic!("expected a GraphQL error, got {body}"))
}
