use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{db::entities::user, error::AppError};

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, async_graphql::Enum,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }

    /// Unrecognised stored values get the least privileged role.
    pub fn from_stored(value: &str) -> Self {
        Role::try_from(value).unwrap_or(Role::User)
    }
}

impl TryFrom<&str> for Role {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "USER" => Ok(Role::User),
            "ADMIN" => Ok(Role::Admin),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub role: Role,
    pub iat: usize,
    pub exp: usize,
}

/// Verified identity of the requester, passed explicitly into every guarded call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
}

impl Caller {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl TryFrom<Claims> for Caller {
    type Error = AppError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::unauthenticated("Invalid or expired token"))?;
        Ok(Self {
            id,
            email: claims.email,
            role: claims.role,
        })
    }
}

#[derive(Debug, Clone)]
pub struct TokenBundle {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: &'static str,
    pub expires_in: u64,
}

/// Tokens plus the account they were minted for.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub tokens: TokenBundle,
    pub user: user::Model,
}
