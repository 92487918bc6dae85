use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use super::{Claims, Role};
use crate::error::AppError;

pub const INVALID_TOKEN: &str = "Invalid or expired token";

#[derive(Clone)]
pub struct JwtKeys {
    pub enc: EncodingKey,
    pub dec: DecodingKey,
}

impl JwtKeys {
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            enc: EncodingKey::from_secret(secret),
            dec: DecodingKey::from_secret(secret),
        }
    }
}

pub fn now_unix() -> usize {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as usize)
        .unwrap_or_default()
}

pub fn encode_token(keys: &JwtKeys, claims: &Claims) -> Result<String, AppError> {
    let mut header = Header::new(Algorithm::HS256);
    header.typ = Some("JWT".into());

    encode(&header, claims, &keys.enc).map_err(|err| {
        tracing::error!(error = %err, "token encoding failed");
        AppError::internal("Token encoding failed")
    })
}

/// Checks signature and `exp`; any failure is reported the same way.
pub fn decode_token(keys: &JwtKeys, token: &str) -> Result<Claims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.leeway = 0;
    Ok(decode::<Claims>(token, &keys.dec, &validation)?.claims)
}

pub fn make_access_claims(user_id: &Uuid, email: &str, role: Role, ttl_secs: u64) -> Claims {
    let iat = now_unix();
    Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        role,
        iat,
        exp: iat.saturating_add(usize::try_from(ttl_secs).unwrap_or(usize::MAX)),
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        tracing::debug!(error = %err, "rejected access token");
        AppError::unauthenticated(INVALID_TOKEN)
    }
}
