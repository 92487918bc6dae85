pub mod bootstrap;
pub mod guard;
pub mod jwt;
pub mod password;
pub mod providers;
mod types;

pub use guard::{Authentication, Operation, Owned, authenticate, authorize_owned, authorize_role};
pub use types::{AuthSession, Caller, Claims, Role, TokenBundle};
