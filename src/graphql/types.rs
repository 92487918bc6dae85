use async_graphql::{Context, Object, ResultExt, SimpleObject};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    auth::{AuthSession, Role},
    db::entities::{category, todo, user},
    error::AppError,
    services::TodoStatus,
};

use super::context::{caller, services};

pub struct UserType(pub user::Model);

/// A registered account. The password hash is never exposed.
#[Object(name = "User")]
impl UserType {
    async fn id(&self) -> Uuid {
        self.0.id
    }

    async fn email(&self) -> &str {
        &self.0.email
    }

    async fn role(&self) -> Role {
        Role::from_stored(&self.0.role)
    }

    async fn created_at(&self) -> DateTime<Utc> {
        self.0.created_at.with_timezone(&Utc)
    }

    async fn updated_at(&self) -> DateTime<Utc> {
        self.0.updated_at.with_timezone(&Utc)
    }
}

pub struct TodoType(pub todo::Model);

#[Object(name = "Todo")]
impl TodoType {
    async fn id(&self) -> Uuid {
        self.0.id
    }

    async fn title(&self) -> &str {
        &self.0.title
    }

    async fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }

    async fn status(&self) -> TodoStatus {
        TodoStatus::from_stored(&self.0.status)
    }

    async fn user_id(&self) -> Uuid {
        self.0.user_id
    }

    /// The owner, which is always the requesting user.
    async fn user(&self, ctx: &Context<'_>) -> async_graphql::Result<UserType> {
        let user = services(ctx)?
            .user()
            .find_by_id(&self.0.user_id)
            .await
            .extend()?
            .ok_or_else(|| AppError::not_found("User not found"))
            .extend()?;
        Ok(UserType(user))
    }

    async fn category_id(&self) -> Option<Uuid> {
        self.0.category_id
    }

    async fn category(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<CategoryType>> {
        let Some(category_id) = self.0.category_id else {
            return Ok(None);
        };
        let caller = caller(ctx)?;
        match services(ctx)?.category().find_one(caller, category_id).await {
            Ok(category) => Ok(Some(CategoryType(category))),
            // Removed after this todo was loaded.
            Err(AppError::NotFound(_)) => Ok(None),
            Err(err) => Err(err).extend(),
        }
    }

    async fn created_at(&self) -> DateTime<Utc> {
        self.0.created_at.with_timezone(&Utc)
    }

    async fn updated_at(&self) -> DateTime<Utc> {
        self.0.updated_at.with_timezone(&Utc)
    }
}

pub struct CategoryType(pub category::Model);

#[Object(name = "Category")]
impl CategoryType {
    async fn id(&self) -> Uuid {
        self.0.id
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }

    async fn created_at(&self) -> DateTime<Utc> {
        self.0.created_at.with_timezone(&Utc)
    }

    async fn updated_at(&self) -> DateTime<Utc> {
        self.0.updated_at.with_timezone(&Utc)
    }
}

#[derive(SimpleObject)]
pub struct AuthPayload {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    /// Access token lifetime in seconds.
    pub expires_in: u64,
    pub user: UserType,
}

impl From<AuthSession> for AuthPayload {
    fn from(session: AuthSession) -> Self {
        Self {
            access_token: session.tokens.access_token,
            refresh_token: session.tokens.refresh_token,
            token_type: session.tokens.token_type.to_string(),
            expires_in: session.tokens.expires_in,
            user: UserType(session.user),
        }
    }
}
