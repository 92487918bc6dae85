use anyhow::{Result, bail};

use super::{
    AppConfig,
    defaults::{MAX_ACCESS_TTL_SECS, MAX_REFRESH_TTL_DAYS},
};
use crate::auth::password::MIN_PASSWORD_LEN;

/// Collects every problem so a bad deployment is fixed in one pass.
pub fn validate(cfg: &AppConfig) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if cfg.general.host.trim().is_empty() {
        errors.push("general.host must not be empty".to_string());
    }

    if let Some(database) = cfg.database.as_ref() {
        if database.url.trim().is_empty() {
            errors.push("database.url must not be empty".to_string());
        }

        if database.min_idle > database.max_connections {
            errors.push(format!(
                "database.min_idle ({}) must be <= database.max_connections ({})",
                database.min_idle, database.max_connections
            ));
        }
    }

    if let Some(auth) = cfg.auth.as_ref() {
        if auth.admin_email.trim().is_empty() {
            errors.push("auth.admin_email must not be empty".to_string());
        }

        if auth.admin_password.chars().count() < MIN_PASSWORD_LEN {
            errors.push(format!(
                "auth.admin_password must be at least {MIN_PASSWORD_LEN} characters"
            ));
        }

        if auth.jwt_secret.trim().is_empty() {
            errors.push("auth.jwt_secret must not be empty".to_string());
        }

        if auth.access_ttl_secs == 0 || auth.access_ttl_secs > MAX_ACCESS_TTL_SECS {
            errors.push(format!(
                "auth.access_ttl_secs must be between 1 and {MAX_ACCESS_TTL_SECS}"
            ));
        }

        if auth.refresh_ttl_days <= 0 || auth.refresh_ttl_days > MAX_REFRESH_TTL_DAYS {
            errors.push(format!(
                "auth.refresh_ttl_days must be between 1 and {MAX_REFRESH_TTL_DAYS}"
            ));
        }
    }

    if cfg.graphql.max_depth == 0 {
        errors.push("graphql.max_depth must be > 0".to_string());
    }

    if cfg.graphql.max_complexity == 0 {
        errors.push("graphql.max_complexity must be > 0".to_string());
    }

    if errors.is_empty() {
        return Ok(());
    }

    bail!("invalid app config:\n- {}", errors.join("\n- "))
}
