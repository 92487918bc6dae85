mod common;

use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use serde_json::json;
use uuid::Uuid;

use todo_api::{
    auth::Role,
    db::entities::{category, todo},
    test_helpers::{access_token, category_model, test_router, todo_model},
};

use common::{SECRET, error_code, graphql};

const TODO_FIELDS: &str = "id title description status userId categoryId";

fn alice() -> (Uuid, String) {
    let id = Uuid::new_v4();
    (id, access_token(SECRET, id, "alice@example.com", Role::User))
}

#[tokio::test]
async fn create_todo_defaults_to_pending_and_owner_is_caller() {
    let (alice_id, token) = alice();
    let todo_id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[todo_model(todo_id, alice_id, "buy milk")]])
        .into_connection();

    let body = graphql(
        test_router(db, SECRET),
        Some(&token),
        &format!(
            "mutation($input: CreateTodoInput!) {{ createTodo(createTodoInput: $input) {{ {TODO_FIELDS} }} }}"
        ),
        json!({ "input": { "title": "  buy milk  " } }),
    )
    .await;

    assert!(body["errors"].is_null(), "unexpected errors: {body}");
    let todo = &body["data"]["createTodo"];
    assert_eq!(todo["id"], todo_id.to_string());
    assert_eq!(todo["status"], "PENDING");
    assert_eq!(todo["userId"], alice_id.to_string());
    assert!(todo["categoryId"].is_null());
}

#[tokio::test]
async fn create_todo_with_blank_title_is_validation_error() {
    let (_, token) = alice();
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let body = graphql(
        test_router(db.clone(), SECRET),
        Some(&token),
        "mutation { createTodo(createTodoInput: { title: \"   \" }) { id } }",
        json!({}),
    )
    .await;

    assert_eq!(error_code(&body), "VALIDATION");
    assert!(db.into_transaction_log().is_empty());
}

#[tokio::test]
async fn todos_lists_only_what_the_store_returns_for_the_caller() {
    let (alice_id, token) = alice();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            todo_model(Uuid::new_v4(), alice_id, "newest"),
            todo_model(Uuid::new_v4(), alice_id, "older"),
        ]])
        .into_connection();

    let body = graphql(
        test_router(db.clone(), SECRET),
        Some(&token),
        "{ todos { title userId } }",
        json!({}),
    )
    .await;

    let todos = body["data"]["todos"].as_array().expect("todo list");
    assert_eq!(todos.len(), 2);
    assert_eq!(todos[0]["title"], "newest");

    let log = db.into_transaction_log();
    assert_eq!(log.len(), 1);
    assert!(format!("{:?}", log[0]).contains(&alice_id.to_string()));
}

#[tokio::test]
async fn reading_a_missing_todo_is_not_found() {
    let (_, token) = alice();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<todo::Model>::new()])
        .into_connection();

    let body = graphql(
        test_router(db, SECRET),
        Some(&token),
        "query($id: UUID!) { todo(id: $id) { id } }",
        json!({ "id": Uuid::new_v4() }),
    )
    .await;

    assert_eq!(error_code(&body), "NOT_FOUND");
    assert_eq!(body["errors"][0]["message"], "Todo not found");
}

#[tokio::test]
async fn another_users_todo_is_forbidden_even_for_admins() {
    let owner = Uuid::new_v4();
    let todo_id = Uuid::new_v4();
    let admin_token = access_token(SECRET, Uuid::new_v4(), "root@example.com", Role::Admin);
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[todo_model(todo_id, owner, "private")]])
        .into_connection();

    let body = graphql(
        test_router(db, SECRET),
        Some(&admin_token),
        "query($id: UUID!) { todo(id: $id) { id title } }",
        json!({ "id": todo_id }),
    )
    .await;

    assert_eq!(error_code(&body), "FORBIDDEN");
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn non_owner_update_is_forbidden_before_validation() {
    let (_, token) = alice();
    let todo_id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[todo_model(todo_id, Uuid::new_v4(), "not yours")]])
        .into_connection();

    let body = graphql(
        test_router(db.clone(), SECRET),
        Some(&token),
        "mutation($input: UpdateTodoInput!) { updateTodo(updateTodoInput: $input) { id } }",
        json!({ "input": { "id": todo_id, "title": "" } }),
    )
    .await;

    assert_eq!(error_code(&body), "FORBIDDEN");
    assert_eq!(db.into_transaction_log().len(), 1);
}

#[tokio::test]
async fn update_changes_only_the_fields_sent() {
    let (alice_id, token) = alice();
    let todo_id = Uuid::new_v4();
    let current = todo::Model {
        description: Some("two litres".to_string()),
        ..todo_model(todo_id, alice_id, "buy milk")
    };
    let updated = todo::Model {
        status: "IN_PROGRESS".to_string(),
        ..current.clone()
    };
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[current]])
        .append_query_results([[updated]])
        .into_connection();

    let body = graphql(
        test_router(db.clone(), SECRET),
        Some(&token),
        &format!(
            "mutation($input: UpdateTodoInput!) {{ updateTodo(updateTodoInput: $input) {{ {TODO_FIELDS} }} }}"
        ),
        json!({ "input": { "id": todo_id, "status": "IN_PROGRESS" } }),
    )
    .await;

    assert!(body["errors"].is_null(), "unexpected errors: {body}");
    let todo = &body["data"]["updateTodo"];
    assert_eq!(todo["status"], "IN_PROGRESS");
    assert_eq!(todo["title"], "buy milk");
    assert_eq!(todo["description"], "two litres");

    let log = db.into_transaction_log();
    assert_eq!(log.len(), 2);
    let statement = format!("{:?}", log[1]);
    let set_clause = statement.split(" WHERE ").next().unwrap_or_default();
    assert!(set_clause.contains("status"));
    assert!(!set_clause.contains("title"));
    assert!(!set_clause.contains("description"));
}

#[tokio::test]
async fn explicit_null_clears_nullable_fields() {
    let (alice_id, token) = alice();
    let todo_id = Uuid::new_v4();
    let current = todo::Model {
        description: Some("two litres".to_string()),
        ..todo_model(todo_id, alice_id, "buy milk")
    };
    let cleared = todo::Model {
        description: None,
        ..current.clone()
    };
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[current]])
        .append_query_results([[cleared]])
        .into_connection();

    let body = graphql(
        test_router(db.clone(), SECRET),
        Some(&token),
        "mutation($input: UpdateTodoInput!) { updateTodo(updateTodoInput: $input) { description } }",
        json!({ "input": { "id": todo_id, "description": null } }),
    )
    .await;

    assert!(body["errors"].is_null(), "unexpected errors: {body}");
    assert!(body["data"]["updateTodo"]["description"].is_null());

    let log = db.into_transaction_log();
    let statement = format!("{:?}", log[1]);
    let set_clause = statement.split(" WHERE ").next().unwrap_or_default();
    assert!(set_clause.contains("description"));
}

#[tokio::test]
async fn remove_todo_returns_the_deleted_snapshot() {
    let (alice_id, token) = alice();
    let todo_id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[todo_model(todo_id, alice_id, "done soon")]])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let body = graphql(
        test_router(db, SECRET),
        Some(&token),
        "mutation($id: UUID!) { removeTodo(id: $id) { id title } }",
        json!({ "id": todo_id }),
    )
    .await;

    assert!(body["errors"].is_null(), "unexpected errors: {body}");
    assert_eq!(body["data"]["removeTodo"]["title"], "done soon");
}

#[tokio::test]
async fn todo_resolves_its_category() {
    let (alice_id, token) = alice();
    let todo_id = Uuid::new_v4();
    let category_id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[todo::Model {
            category_id: Some(category_id),
            ..todo_model(todo_id, alice_id, "file taxes")
        }]])
        .append_query_results([[category_model(category_id, "Paperwork")]])
        .into_connection();

    let body = graphql(
        test_router(db, SECRET),
        Some(&token),
        "query($id: UUID!) { todo(id: $id) { title category { id name } } }",
        json!({ "id": todo_id }),
    )
    .await;

    assert!(body["errors"].is_null(), "unexpected errors: {body}");
    assert_eq!(body["data"]["todo"]["category"]["name"], "Paperwork");
}

#[tokio::test]
async fn dangling_category_resolves_to_null() {
    let (alice_id, token) = alice();
    let todo_id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[todo::Model {
            category_id: Some(Uuid::new_v4()),
            ..todo_model(todo_id, alice_id, "file taxes")
        }]])
        .append_query_results([Vec::<category::Model>::new()])
        .into_connection();

    let body = graphql(
        test_router(db, SECRET),
        Some(&token),
        "query($id: UUID!) { todo(id: $id) { title category { name } } }",
        json!({ "id": todo_id }),
    )
    .await;

    assert!(body["errors"].is_null(), "unexpected errors: {body}");
    assert!(body["data"]["todo"]["category"].is_null());
}
