use sea_orm::DatabaseConnection;
use tracing::info;

use super::providers::default_registry;
use crate::config::DatabaseConfig;

/// Entity path prefix handed to the sea-orm schema registry.
pub const ENTITY_MODULES: &str = "todo_api::db::entities::*";

pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let providers = default_registry()?;
    let provider = providers.provider_for_url(&cfg.url)?;
    info!(provider = provider.id().as_str(), "connecting to database");

    let db = provider.connect(cfg).await?;
    provider.post_connect(&db, cfg).await?;

    info!("syncing database schema from entities");
    db.get_schema_registry(ENTITY_MODULES).sync(&db).await?;
    Ok(db)
}
