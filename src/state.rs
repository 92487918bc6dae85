use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    auth::providers::AuthProviders,
    config::AppConfig,
    graphql::{AppSchema, build_schema},
    services::{AuthService, ServiceContext},
};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub auth_providers: AuthProviders,
    pub schema: AppSchema,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        db: &DatabaseConnection,
        auth_providers: AuthProviders,
    ) -> Arc<Self> {
        let schema = build_schema(
            ServiceContext::new(db),
            auth_providers.clone(),
            &config.graphql,
        );
        Arc::new(Self {
            config,
            auth_providers,
            schema,
        })
    }

    pub fn auth_service(&self) -> AuthService<'_> {
        AuthService::new(&self.auth_providers)
    }
}
