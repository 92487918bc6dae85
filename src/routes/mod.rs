mod entry;
mod graphql;
mod health;
pub mod middleware;

pub use entry::{GRAPHQL_PATH, router};
pub use middleware::{catch_panic_layer, json_error_middleware};
