use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::auth::providers::AuthProviderId;

use super::{defaults, envconfig::EnvConfig, validate};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub logging: LoggingConfig,
    pub database: Option<DatabaseConfig>,
    pub auth: Option<AuthConfig>,
    pub graphql: GraphqlConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        <Self as EnvConfig>::from_env()
    }
}

impl EnvConfig for AppConfig {
    fn validate(&self) -> Result<()> {
        validate::validate(self)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneralConfig {
    pub host: String,
    pub port: u16,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            host: defaults::DEFAULT_HOST.to_string(),
            port: defaults::DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub rust_log: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            rust_log: defaults::DEFAULT_RUST_LOG.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_db_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_db_min_idle")]
    pub min_idle: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    #[serde(default = "default_auth_provider")]
    pub provider: AuthProviderId,
    pub jwt_secret: String,
    pub admin_email: String,
    pub admin_password: String,
    #[serde(default = "default_access_ttl_secs")]
    pub access_ttl_secs: u64,
    #[serde(default = "default_refresh_ttl_days")]
    pub refresh_ttl_days: i64,
}

impl AuthConfig {
    /// Local provider settings with default lifetimes.
    pub fn local(jwt_secret: impl Into<String>, admin_email: &str, admin_password: &str) -> Self {
        Self {
            provider: AuthProviderId::Local,
            jwt_secret: jwt_secret.into(),
            admin_email: admin_email.to_string(),
            admin_password: admin_password.to_string(),
            access_ttl_secs: defaults::DEFAULT_ACCESS_TTL_SECS,
            refresh_ttl_days: defaults::DEFAULT_REFRESH_TTL_DAYS,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphqlConfig {
    pub max_depth: usize,
    pub max_complexity: usize,
    /// Serve GraphiQL on `GET /graphql`.
    pub playground: bool,
}

impl Default for GraphqlConfig {
    fn default() -> Self {
        Self {
            max_depth: defaults::DEFAULT_GRAPHQL_MAX_DEPTH,
            max_complexity: defaults::DEFAULT_GRAPHQL_MAX_COMPLEXITY,
            playground: defaults::DEFAULT_GRAPHQL_PLAYGROUND,
        }
    }
}

fn default_db_max_connections() -> u32 {
    defaults::DEFAULT_DB_MAX_CONNECTIONS
}

fn default_db_min_idle() -> u32 {
    defaults::DEFAULT_DB_MIN_IDLE
}

fn default_auth_provider() -> AuthProviderId {
    AuthProviderId::Local
}

fn default_access_ttl_secs() -> u64 {
    defaults::DEFAULT_ACCESS_TTL_SECS
}

fn default_refresh_ttl_days() -> i64 {
    defaults::DEFAULT_REFRESH_TTL_DAYS
}
