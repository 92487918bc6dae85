use crate::{
    auth::{Authentication, AuthSession, Caller, providers::AuthProviders},
    config::AuthConfig,
    error::AppError,
};

/// Thin facade over the active [`AuthProvider`](crate::auth::providers::AuthProvider).
#[derive(Clone, Copy)]
pub struct AuthService<'a> {
    providers: &'a AuthProviders,
}

impl<'a> AuthService<'a> {
    pub fn new(providers: &'a AuthProviders) -> Self {
        Self { providers }
    }

    pub async fn register(&self, email: &str, password: &str) -> Result<AuthSession, AppError> {
        self.providers.active()?.register(email, password).await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, AppError> {
        self.providers.active()?.login(email, password).await
    }

    pub async fn refresh(&self, refresh_token: &str) -> Result<AuthSession, AppError> {
        self.providers.active()?.refresh(refresh_token).await
    }

    pub async fn logout(&self, refresh_token: &str) -> Result<bool, AppError> {
        self.providers.active()?.logout(refresh_token).await
    }

    /// Maps a raw bearer token (if any) onto the request's authentication state.
    pub async fn authenticate_token(&self, token: Option<&str>) -> Authentication {
        let Some(token) = token else {
            return Authentication::Anonymous;
        };
        let verified = match self.providers.active() {
            Ok(provider) => provider.verify(token).await,
            Err(err) => Err(err),
        };
        match verified.and_then(Caller::try_from) {
            Ok(caller) => Authentication::Verified(caller),
            Err(err) => Authentication::Rejected(err),
        }
    }

    pub async fn seed_admin(&self, cfg: &AuthConfig) -> anyhow::Result<()> {
        self.providers.active()?.seed_admin(cfg).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use uuid::Uuid;

    use super::AuthService;
    use crate::{
        auth::{
            AuthSession, Authentication, Claims, Role,
            providers::{AuthProvider, AuthProviderId, AuthProviders},
        },
        error::AppError,
    };

    struct FixedClaimsProvider {
        sub: String,
    }

    #[async_trait]
    impl AuthProvider for FixedClaimsProvider {
        fn id(&self) -> AuthProviderId {
            AuthProviderId::Local
        }

        async fn register(&self, _email: &str, _password: &str) -> Result<AuthSession, AppError> {
            Err(AppError::internal("not used"))
        }

        async fn login(&self, _email: &str, _password: &str) -> Result<AuthSession, AppError> {
            Err(AppError::internal("not used"))
        }

        async fn refresh(&self, _refresh_token: &str) -> Result<AuthSession, AppError> {
            Err(AppError::internal("not used"))
        }

        async fn logout(&self, refresh_token: &str) -> Result<bool, AppError> {
            Ok(refresh_token == "live")
        }

        async fn verify(&self, access_token: &str) -> Result<Claims, AppError> {
            if access_token != "good" {
                return Err(AppError::unauthenticated("Invalid or expired token"));
            }
            Ok(Claims {
                sub: self.sub.clone(),
                email: "a@x.com".to_string(),
                role: Role::User,
                iat: 0,
                exp: usize::MAX,
            })
        }
    }

    fn providers(sub: String) -> AuthProviders {
        AuthProviders::new(AuthProviderId::Local)
            .with_provider(Arc::new(FixedClaimsProvider { sub }))
            .expect("registration should succeed")
    }

    #[tokio::test]
    async fn missing_token_is_anonymous() {
        let providers = providers(Uuid::new_v4().to_string());
        let auth = AuthService::new(&providers).authenticate_token(None).await;
        assert!(matches!(auth, Authentication::Anonymous));
    }

    #[tokio::test]
    async fn bad_token_is_rejected_with_reason() {
        let providers = providers(Uuid::new_v4().to_string());
        let auth = AuthService::new(&providers)
            .authenticate_token(Some("bad"))
            .await;
        assert!(matches!(auth, Authentication::Rejected(ref err) if err.code() == "UNAUTHENTICATED"));
    }

    #[tokio::test]
    async fn good_token_yields_caller() {
        let id = Uuid::new_v4();
        let providers = providers(id.to_string());
        let auth = AuthService::new(&providers)
            .authenticate_token(Some("good"))
            .await;
        assert!(matches!(auth, Authentication::Verified(ref caller) if caller.id == id));
    }

    #[tokio::test]
    async fn malformed_subject_is_rejected() {
        let providers = providers("42".to_string());
        let auth = AuthService::new(&providers)
            .authenticate_token(Some("good"))
            .await;
        assert!(matches!(auth, Authentication::Rejected(_)));
    }

    #[tokio::test]
    async fn logout_delegates_to_provider() {
        let providers = providers(Uuid::new_v4().to_string());
        let service = AuthService::new(&providers);
        assert!(service.logout("live").await.expect("logout should run"));
        assert!(!service.logout("stale").await.expect("logout should run"));
    }
}
