use std::sync::Arc;

use axum::{Router, routing::post};

use crate::state::AppState;

use super::{graphql, health};

pub const GRAPHQL_PATH: &str = "/graphql";

pub fn router(state: Arc<AppState>) -> Router {
    let mut graphql_route = post(graphql::execute);
    if state.config.graphql.playground {
        graphql_route = graphql_route.get(graphql::playground);
    }

    Router::new()
        .route(GRAPHQL_PATH, graphql_route)
        .merge(health::router())
        .with_state(state)
}
