pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_RUST_LOG: &str = "info,tower_http=info";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_DB_MIN_IDLE: u32 = 2;
pub const DEFAULT_ACCESS_TTL_SECS: u64 = 15 * 60;
pub const DEFAULT_REFRESH_TTL_DAYS: i64 = 30;
pub const MAX_ACCESS_TTL_SECS: u64 = 24 * 60 * 60;
pub const MAX_REFRESH_TTL_DAYS: i64 = 365;
pub const DEFAULT_GRAPHQL_MAX_DEPTH: usize = 10;
pub const DEFAULT_GRAPHQL_MAX_COMPLEXITY: usize = 100;
pub const DEFAULT_GRAPHQL_PLAYGROUND: bool = true;
