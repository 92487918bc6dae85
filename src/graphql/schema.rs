use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::{auth::providers::AuthProviders, config::GraphqlConfig, services::ServiceContext};

use super::{
    auth::{AuthMutation, AuthQuery},
    category::{CategoryMutation, CategoryQuery},
    todo::{TodoMutation, TodoQuery},
};

#[derive(MergedObject, Default)]
pub struct QueryRoot(AuthQuery, TodoQuery, CategoryQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(AuthMutation, TodoMutation, CategoryMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Shared services and auth providers ride along as schema data; the
/// per-request [`Authentication`](crate::auth::Authentication) is attached
/// by the HTTP handler.
pub fn build_schema(
    services: ServiceContext,
    providers: AuthProviders,
    cfg: &GraphqlConfig,
) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .limit_depth(cfg.max_depth)
        .limit_complexity(cfg.max_complexity)
        .data(services)
        .data(providers)
        .finish()
}
