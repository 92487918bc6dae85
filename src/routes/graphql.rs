use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use axum::{
    Json,
    extract::{FromRequestParts, State},
    http::{header, request::Parts},
    response::Html,
};

use crate::{
    auth::{Authentication, guard::MISSING_CREDENTIALS},
    error::AppError,
    state::AppState,
};

use super::entry::GRAPHQL_PATH;

// Never rejects: resolvers that need identity fail individually, public
// mutations such as `signup` go through.
impl FromRequestParts<Arc<AppState>> for Authentication {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        if let Some(auth) = parts.extensions.get::<Authentication>().cloned() {
            return Ok(auth);
        }

        let Some(value) = parts.headers.get(header::AUTHORIZATION) else {
            return Ok(Authentication::Anonymous);
        };
        let token = value
            .to_str()
            .ok()
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty());

        let auth = match token {
            Some(token) => state.auth_service().authenticate_token(Some(token)).await,
            None => Authentication::Rejected(AppError::unauthenticated(MISSING_CREDENTIALS)),
        };
        parts.extensions.insert(auth.clone());
        Ok(auth)
    }
}

pub(super) async fn execute(
    State(state): State<Arc<AppState>>,
    auth: Authentication,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    if let Authentication::Rejected(err) = &auth {
        tracing::debug!(reason = err.message(), "bearer token rejected");
    }
    Json(state.schema.execute(request.data(auth)).await)
}

pub(super) async fn playground() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
