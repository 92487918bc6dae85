use async_graphql::{Context, ErrorExtensions};

use crate::{
    auth::{
        Authentication, Caller, authenticate, guard::MISSING_CREDENTIALS,
        providers::AuthProviders,
    },
    error::AppError,
    services::{AuthService, ServiceContext},
};

impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.message())
            .extend_with(|_, ext| ext.set("code", self.code()))
    }
}

/// Authentication is always the first check a guarded resolver performs.
pub(crate) fn caller<'c>(ctx: &'c Context<'_>) -> async_graphql::Result<&'c Caller> {
    match ctx.data_opt::<Authentication>() {
        Some(auth) => authenticate(auth).map_err(|err| err.extend()),
        None => Err(AppError::unauthenticated(MISSING_CREDENTIALS).extend()),
    }
}

pub(crate) fn services<'c>(ctx: &'c Context<'_>) -> async_graphql::Result<&'c ServiceContext> {
    ctx.data::<ServiceContext>()
}

pub(crate) fn auth_service<'c>(ctx: &'c Context<'_>) -> async_graphql::Result<AuthService<'c>> {
    Ok(AuthService::new(ctx.data::<AuthProviders>()?))
}
