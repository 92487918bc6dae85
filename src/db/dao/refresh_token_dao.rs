use chrono::{Duration, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use super::{DaoBase, DaoLayerError, DaoResult};
use crate::db::entities::refresh_token::{self, Entity as RefreshToken};

#[derive(Clone)]
pub struct RefreshTokenDao {
    db: DatabaseConnection,
}

impl DaoBase for RefreshTokenDao {
    type Entity = RefreshToken;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl RefreshTokenDao {
    pub async fn create_refresh_token(
        &self,
        user_id: Uuid,
        ttl_days: i64,
    ) -> DaoResult<refresh_token::Model> {
        let expires_at = Duration::try_days(ttl_days)
            .and_then(|ttl| Utc::now().fixed_offset().checked_add_signed(ttl))
            .ok_or_else(|| {
                DaoLayerError::Db(DbErr::Custom(format!(
                    "refresh token lifetime of {ttl_days} days is out of range"
                )))
            })?;
        let model = refresh_token::ActiveModel {
            token: Set(Uuid::new_v4().simple().to_string()),
            user_id: Set(user_id),
            expires_at: Set(expires_at),
            revoked: Set(false),
            ..Default::default()
        };
        self.create(model).await
    }

    /// Unrevoked token row; expiry is left to the caller.
    pub async fn find_active_by_token(
        &self,
        token: &str,
    ) -> DaoResult<Option<refresh_token::Model>> {
        let token = token.to_string();
        self.find(1, 1, None, move |query| {
            query
                .filter(refresh_token::Column::Token.eq(token))
                .filter(refresh_token::Column::Revoked.eq(false))
        })
        .await
        .map(|page| page.data.into_iter().next())
    }

    /// Returns whether a live token was revoked.
    pub async fn revoke_token(&self, token: &str) -> DaoResult<bool> {
        let result = RefreshToken::update_many()
            .col_expr(
                refresh_token::Column::Revoked,
                sea_orm::sea_query::Expr::value(true),
            )
            .col_expr(
                refresh_token::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now().fixed_offset()),
            )
            .filter(refresh_token::Column::Token.eq(token))
            .filter(refresh_token::Column::Revoked.eq(false))
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
