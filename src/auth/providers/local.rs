use async_trait::async_trait;
use chrono::Utc;

use crate::{
    auth::{
        AuthSession, Claims, Role, TokenBundle,
        jwt::{JwtKeys, decode_token, encode_token, make_access_claims},
        password::{check_password_policy, hash_password, verify_password},
    },
    config::AuthConfig,
    db::{dao::RefreshTokenDao, entities::user},
    error::AppError,
    services::user_service::UserService,
};

use super::{AuthProvider, AuthProviderId};

const INVALID_CREDENTIALS: &str = "Invalid credentials";
const INVALID_REFRESH_TOKEN: &str = "Invalid refresh token";

/// Email and password accounts stored in the application database.
#[derive(Clone)]
pub struct LocalAuthProvider {
    user_service: UserService,
    refresh_token_dao: RefreshTokenDao,
    jwt: JwtKeys,
    access_ttl_secs: u64,
    refresh_ttl_days: i64,
}

impl LocalAuthProvider {
    pub fn new(
        user_service: UserService,
        refresh_token_dao: RefreshTokenDao,
        cfg: &AuthConfig,
    ) -> Self {
        Self {
            user_service,
            refresh_token_dao,
            jwt: JwtKeys::from_secret(cfg.jwt_secret.as_bytes()),
            access_ttl_secs: cfg.access_ttl_secs,
            refresh_ttl_days: cfg.refresh_ttl_days,
        }
    }

    async fn issue_session(&self, user: user::Model) -> Result<AuthSession, AppError> {
        let role = Role::from_stored(&user.role);
        let claims = make_access_claims(&user.id, &user.email, role, self.access_ttl_secs);
        let access_token = encode_token(&self.jwt, &claims)?;

        let refresh = self
            .refresh_token_dao
            .create_refresh_token(user.id, self.refresh_ttl_days)
            .await?;

        Ok(AuthSession {
            tokens: TokenBundle {
                access_token,
                refresh_token: refresh.token,
                token_type: "Bearer",
                expires_in: self.access_ttl_secs,
            },
            user,
        })
    }
}

/// Trimmed address with a non-empty local part and a dotted domain.
fn normalize_email(raw: &str) -> Result<String, AppError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(AppError::validation("Email required"));
    }

    let well_formed = email.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty()
            && !domain.contains('@')
            && domain.contains('.')
            && !domain.starts_with('.')
            && !domain.ends_with('.')
    }) && !email.chars().any(char::is_whitespace);

    if !well_formed {
        return Err(AppError::validation("Email must be a valid email address"));
    }
    Ok(email.to_string())
}

#[async_trait]
impl AuthProvider for LocalAuthProvider {
    fn id(&self) -> AuthProviderId {
        AuthProviderId::Local
    }

    async fn register(&self, email: &str, password: &str) -> Result<AuthSession, AppError> {
        let email = normalize_email(email)?;
        check_password_policy(password)?;

        if self.user_service.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("User already exists"));
        }

        let password_hash = hash_password(password)?;
        let user = self
            .user_service
            .create_user(&email, &password_hash, Role::User)
            .await
            .map_err(|err| match err {
                AppError::Conflict(_) => AppError::conflict("User already exists"),
                other => other,
            })?;
        tracing::info!(user_id = %user.id, "account created");

        self.issue_session(user).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<AuthSession, AppError> {
        let user = self
            .user_service
            .find_by_email(email.trim())
            .await?
            .ok_or_else(|| AppError::unauthenticated(INVALID_CREDENTIALS))?;

        if !verify_password(password, &user.password_hash)? {
            return Err(AppError::unauthenticated(INVALID_CREDENTIALS));
        }

        self.issue_session(user).await
    }

    async fn refresh(&self, refresh_token: &str) -> Result<AuthSession, AppError> {
        let token = self
            .refresh_token_dao
            .find_active_by_token(refresh_token)
            .await?
            .ok_or_else(|| AppError::unauthenticated(INVALID_REFRESH_TOKEN))?;

        if token.expires_at < Utc::now().fixed_offset() {
            return Err(AppError::unauthenticated("Refresh token expired"));
        }

        // Claims come from the stored account, not the previous access token.
        let user = self
            .user_service
            .find_by_id(&token.user_id)
            .await?
            .ok_or_else(|| AppError::unauthenticated(INVALID_REFRESH_TOKEN))?;

        if !self.refresh_token_dao.revoke_token(refresh_token).await? {
            return Err(AppError::unauthenticated(INVALID_REFRESH_TOKEN));
        }

        self.issue_session(user).await
    }

    async fn logout(&self, refresh_token: &str) -> Result<bool, AppError> {
        Ok(self.refresh_token_dao.revoke_token(refresh_token).await?)
    }

    async fn verify(&self, access_token: &str) -> Result<Claims, AppError> {
        decode_token(&self.jwt, access_token)
    }

    async fn seed_admin(&self, cfg: &AuthConfig) -> anyhow::Result<()> {
        // Same normalization as login, so the seeded account can sign in.
        let email = normalize_email(&cfg.admin_email)
            .map_err(|err| anyhow::anyhow!("invalid auth.admin_email: {err}"))?;
        if let Some(existing) = self.user_service.find_by_email(&email).await? {
            tracing::info!(email = %existing.email, "admin user already present");
            return Ok(());
        }

        let hash = hash_password(&cfg.admin_password)
            .map_err(|err| anyhow::anyhow!("admin seed hash error: {err}"))?;
        let user = self
            .user_service
            .create_user(&email, &hash, Role::Admin)
            .await?;
        tracing::info!(email = %user.email, "seeded admin user");
        Ok(())
    }
}
