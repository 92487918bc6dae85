//! Fixtures shared by unit tests and the `tests/` integration suite.

use std::sync::Arc;

use axum::{Router, middleware};
use chrono::{DateTime, Duration, FixedOffset, Utc};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    auth::{
        Role,
        bootstrap::build_providers,
        jwt::{JwtKeys, encode_token, make_access_claims},
    },
    config::{AppConfig, AuthConfig},
    db::entities::{category, refresh_token, todo, user},
    routes::{catch_panic_layer, json_error_middleware, router},
    services::ServiceContext,
    state::AppState,
};

pub const TEST_ADMIN_EMAIL: &str = "admin@example.com";
pub const TEST_ADMIN_PASSWORD: &str = "admin-password";

pub fn ts() -> DateTime<FixedOffset> {
    Utc::now().fixed_offset()
}

pub fn user_model(id: Uuid, email: &str, role: &str) -> user::Model {
    user_with_hash(id, email, "hash", role)
}

pub fn user_with_hash(id: Uuid, email: &str, password_hash: &str, role: &str) -> user::Model {
    user::Model {
        id,
        created_at: ts(),
        updated_at: ts(),
        email: email.to_string(),
        password_hash: password_hash.to_string(),
        role: role.to_string(),
    }
}

pub fn todo_model(id: Uuid, user_id: Uuid, title: &str) -> todo::Model {
    todo::Model {
        id,
        created_at: ts(),
        updated_at: ts(),
        title: title.to_string(),
        description: None,
        status: "PENDING".to_string(),
        user_id,
        category_id: None,
    }
}

pub fn category_model(id: Uuid, name: &str) -> category::Model {
    category::Model {
        id,
        created_at: ts(),
        updated_at: ts(),
        name: name.to_string(),
        description: None,
    }
}

pub fn refresh_token_model(token: &str, user_id: Uuid, days_valid: i64) -> refresh_token::Model {
    refresh_token::Model {
        id: Uuid::new_v4(),
        created_at: ts(),
        updated_at: ts(),
        token: token.to_string(),
        user_id,
        expires_at: ts() + Duration::days(days_valid),
        revoked: false,
    }
}

pub fn test_config(secret: &str) -> AppConfig {
    AppConfig {
        auth: Some(AuthConfig::local(secret, TEST_ADMIN_EMAIL, TEST_ADMIN_PASSWORD)),
        ..AppConfig::default()
    }
}

pub fn test_state(db: DatabaseConnection, secret: &str) -> Arc<AppState> {
    let cfg = test_config(secret);
    let auth = cfg.auth.clone().expect("test config has auth");
    let providers =
        build_providers(&auth, &ServiceContext::new(&db)).expect("build auth providers");
    AppState::new(cfg, &db, providers)
}

/// The full HTTP stack as `main` assembles it, minus tracing.
pub fn test_router(db: DatabaseConnection, secret: &str) -> Router {
    router(test_state(db, secret))
        .layer(middleware::from_fn(json_error_middleware))
        .layer(catch_panic_layer())
}

pub fn access_token(secret: &str, user_id: Uuid, email: &str, role: Role) -> String {
    let claims = make_access_claims(&user_id, email, role, 900);
    encode_token(&JwtKeys::from_secret(secret.as_bytes()), &claims).expect("encode test token")
}
