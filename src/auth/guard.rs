//! Request authorization.
//!
//! Every guarded operation runs the same sequence: [`authenticate`] turns the
//! request's [`Authentication`] into a [`Caller`], then exactly one policy
//! decides. [`authorize_role`] gates Category mutations on `ADMIN`, and
//! [`authorize_owned`] requires that a Todo exists before it checks who owns
//! it. The guard keeps no state; each decision depends only on its arguments.

use uuid::Uuid;

use super::Caller;
use crate::{db::entities::todo, error::AppError};

pub const MISSING_CREDENTIALS: &str = "Missing/invalid Authorization header";

/// Outcome of reading the bearer token, computed once per HTTP request.
#[derive(Debug, Clone)]
pub enum Authentication {
    Anonymous,
    Rejected(AppError),
    Verified(Caller),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Read,
    List,
    Update,
    Delete,
}

impl Operation {
    pub fn is_mutation(self) -> bool {
        matches!(self, Operation::Create | Operation::Update | Operation::Delete)
    }
}

/// A record that belongs to exactly one user.
pub trait Owned {
    const KIND: &'static str;

    fn owner_id(&self) -> Uuid;
}

impl Owned for todo::Model {
    const KIND: &'static str = "Todo";

    fn owner_id(&self) -> Uuid {
        self.user_id
    }
}

pub fn authenticate(auth: &Authentication) -> Result<&Caller, AppError> {
    match auth {
        Authentication::Verified(caller) => Ok(caller),
        Authentication::Rejected(err) => Err(err.clone()),
        Authentication::Anonymous => Err(AppError::unauthenticated(MISSING_CREDENTIALS)),
    }
}

pub fn authorize_role(caller: &Caller, operation: Operation) -> Result<(), AppError> {
    if !operation.is_mutation() || caller.is_admin() {
        return Ok(());
    }
    tracing::debug!(caller = %caller.id, ?operation, "role check denied");
    Err(AppError::forbidden("Admin role required"))
}

/// Existence first, then ownership. Returns the snapshot on success.
pub fn authorize_owned<T: Owned>(
    caller: &Caller,
    target: Option<T>,
    operation: Operation,
) -> Result<T, AppError> {
    let target = target.ok_or_else(|| AppError::not_found(format!("{} not found", T::KIND)))?;
    if target.owner_id() != caller.id {
        tracing::debug!(caller = %caller.id, ?operation, kind = T::KIND, "ownership check denied");
        return Err(AppError::forbidden(format!(
            "{} belongs to another user",
            T::KIND
        )));
    }
    Ok(target)
}
