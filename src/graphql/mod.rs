//! GraphQL surface: object types over the entities, input types, and the
//! query/mutation roots. Resolvers only translate; guarding happens in the
//! services they call.

mod auth;
mod category;
pub mod context;
mod inputs;
mod schema;
mod todo;
mod types;

pub use schema::{AppSchema, MutationRoot, QueryRoot, build_schema};
