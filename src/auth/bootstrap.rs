use std::sync::Arc;

use crate::{config::AuthConfig, error::AppError, services::ServiceContext};

use super::providers::{AuthProviders, LocalAuthProvider};

pub fn build_providers(
    cfg: &AuthConfig,
    services: &ServiceContext,
) -> Result<AuthProviders, AppError> {
    let local = LocalAuthProvider::new(services.user(), services.refresh_token_dao(), cfg);
    let mut providers = AuthProviders::new(cfg.provider).with_provider(Arc::new(local))?;
    providers.set_active(cfg.provider)?;
    Ok(providers)
}

/// Builds the registry and makes sure the configured admin account exists.
pub async fn init_providers(
    cfg: &AuthConfig,
    services: &ServiceContext,
) -> anyhow::Result<AuthProviders> {
    let providers = build_providers(cfg, services)?;
    services.auth(&providers).seed_admin(cfg).await?;
    Ok(providers)
}
