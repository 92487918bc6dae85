use async_graphql::{Context, Object, ResultExt};

use super::{
    context::{auth_service, caller, services},
    inputs::{LoginInput, SignupInput},
    types::{AuthPayload, UserType},
};

#[derive(Default)]
pub struct AuthQuery;

#[Object]
impl AuthQuery {
    /// The account behind the bearer token.
    async fn me(&self, ctx: &Context<'_>) -> async_graphql::Result<UserType> {
        let caller = caller(ctx)?;
        let user = services(ctx)?.user().me(caller).await.extend()?;
        Ok(UserType(user))
    }
}

#[derive(Default)]
pub struct AuthMutation;

#[Object]
impl AuthMutation {
    async fn signup(
        &self,
        ctx: &Context<'_>,
        signup_input: SignupInput,
    ) -> async_graphql::Result<AuthPayload> {
        let session = auth_service(ctx)?
            .register(&signup_input.email, &signup_input.password)
            .await
            .extend()?;
        Ok(session.into())
    }

    async fn login(
        &self,
        ctx: &Context<'_>,
        login_input: LoginInput,
    ) -> async_graphql::Result<AuthPayload> {
        let session = auth_service(ctx)?
            .login(&login_input.email, &login_input.password)
            .await
            .extend()?;
        Ok(session.into())
    }

    /// Rotates a refresh token: the presented one is revoked and a new pair issued.
    async fn refresh_token(
        &self,
        ctx: &Context<'_>,
        refresh_token: String,
    ) -> async_graphql::Result<AuthPayload> {
        let session = auth_service(ctx)?.refresh(&refresh_token).await.extend()?;
        Ok(session.into())
    }

    /// Returns false when the token was unknown or already revoked.
    async fn logout(&self, ctx: &Context<'_>, refresh_token: String) -> async_graphql::Result<bool> {
        auth_service(ctx)?.logout(&refresh_token).await.extend()
    }
}
