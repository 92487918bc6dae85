mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use serde_json::json;
use uuid::Uuid;

use todo_api::{
    auth::Role,
    db::entities::user,
    test_helpers::{access_token, refresh_token_model, test_router, user_model},
};

use common::{SECRET, error_code, graphql, send};

const SIGNUP: &str = r#"
mutation Signup($input: SignupInput!) {
  signup(signupInput: $input) { accessToken refreshToken tokenType expiresIn user { email role } }
}"#;

#[tokio::test]
async fn health_returns_envelope() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let (status, body) = send(
        test_router(db, SECRET),
        Request::get("/health").body(Body::empty()).expect("request"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], 200);
    assert_eq!(body["data"]["ok"], true);
}

#[tokio::test]
async fn unknown_route_is_json_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let (status, body) = send(
        test_router(db, SECRET),
        Request::get("/nowhere").body(Body::empty()).expect("request"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn playground_is_served_when_enabled() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let response = tower::ServiceExt::oneshot(
        test_router(db, SECRET),
        Request::get("/graphql").body(Body::empty()).expect("request"),
    )
    .await
    .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn me_without_token_is_unauthenticated_and_never_queries() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let body = graphql(test_router(db.clone(), SECRET), None, "{ me { id } }", json!({})).await;

    assert_eq!(error_code(&body), "UNAUTHENTICATED");
    assert_eq!(
        body["errors"][0]["message"],
        "Missing/invalid Authorization header"
    );
    assert!(db.into_transaction_log().is_empty());
}

#[tokio::test]
async fn malformed_or_forged_tokens_are_unauthenticated() {
    let forged = access_token("some-other-secret", Uuid::new_v4(), "eve@example.com", Role::Admin);
    for token in ["not-a-jwt", forged.as_str()] {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let body = graphql(test_router(db, SECRET), Some(token), "{ todos { id } }", json!({})).await;
        assert_eq!(error_code(&body), "UNAUTHENTICATED", "token {token}");
    }
}

#[tokio::test]
async fn non_bearer_scheme_is_unauthenticated() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let request = Request::post("/graphql")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, "Basic YWxpY2U6c2VjcmV0")
        .body(Body::from(json!({ "query": "{ me { id } }" }).to_string()))
        .expect("request");

    let (status, body) = send(test_router(db, SECRET), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(error_code(&body), "UNAUTHENTICATED");
}

#[tokio::test]
async fn signup_returns_tokens_and_user_role() {
    let user_id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<user::Model>::new()])
        .append_query_results([[user_model(user_id, "alice@example.com", "USER")]])
        .append_query_results([[refresh_token_model("refresh-1", user_id, 30)]])
        .into_connection();

    let body = graphql(
        test_router(db, SECRET),
        None,
        SIGNUP,
        json!({ "input": { "email": "Alice@Example.com", "password": "password123" } }),
    )
    .await;

    assert!(body["errors"].is_null(), "unexpected errors: {body}");
    let payload = &body["data"]["signup"];
    assert_eq!(payload["refreshToken"], "refresh-1");
    assert_eq!(payload["tokenType"], "Bearer");
    assert_eq!(payload["expiresIn"], 900);
    assert_eq!(payload["user"]["role"], "USER");
    assert!(!payload["accessToken"].as_str().unwrap_or_default().is_empty());
}

#[tokio::test]
async fn signup_with_short_password_is_validation_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let body = graphql(
        test_router(db.clone(), SECRET),
        None,
        SIGNUP,
        json!({ "input": { "email": "bob@example.com", "password": "123" } }),
    )
    .await;

    assert_eq!(error_code(&body), "VALIDATION");
    assert!(db.into_transaction_log().is_empty());
}

#[tokio::test]
async fn signup_with_taken_email_is_conflict() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[user_model(Uuid::new_v4(), "bob@example.com", "USER")]])
        .into_connection();

    let body = graphql(
        test_router(db, SECRET),
        None,
        SIGNUP,
        json!({ "input": { "email": "bob@example.com", "password": "password123" } }),
    )
    .await;

    assert_eq!(error_code(&body), "CONFLICT");
}

#[tokio::test]
async fn me_returns_stored_user_without_password() {
    let user_id = Uuid::new_v4();
    let token = access_token(SECRET, user_id, "alice@example.com", Role::User);
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[user_model(user_id, "alice@example.com", "USER")]])
        .into_connection();

    let body = graphql(
        test_router(db, SECRET),
        Some(&token),
        "{ me { id email role } }",
        json!({}),
    )
    .await;

    assert!(body["errors"].is_null(), "unexpected errors: {body}");
    assert_eq!(body["data"]["me"]["id"], user_id.to_string());
    assert_eq!(body["data"]["me"]["email"], "alice@example.com");
    assert_eq!(body["data"]["me"]["role"], "USER");
}

#[tokio::test]
async fn logout_reports_whether_a_token_was_revoked() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();
    let app = test_router(db, SECRET);
    let logout = "mutation($token: String!) { logout(refreshToken: $token) }";

    let first = graphql(app.clone(), None, logout, json!({ "token": "refresh-1" })).await;
    assert_eq!(first["data"]["logout"], true);

    let second = graphql(app, None, logout, json!({ "token": "refresh-1" })).await;
    assert_eq!(second["data"]["logout"], false);
}
