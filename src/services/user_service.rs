use uuid::Uuid;

use crate::{
    auth::{Caller, Role},
    db::dao::{DaoBase, UserDao},
    db::entities::user,
    error::AppError,
};

/// Credential store: lookups and inserts, nothing else.
#[derive(Clone)]
pub struct UserService {
    user_dao: UserDao,
}

impl UserService {
    pub fn new(user_dao: UserDao) -> Self {
        Self { user_dao }
    }

    pub async fn find_by_id(&self, id: &Uuid) -> Result<Option<user::Model>, AppError> {
        Ok(self.user_dao.find_optional(*id).await?)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, AppError> {
        Ok(self.user_dao.find_by_email(email).await?)
    }

    pub async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
        role: Role,
    ) -> Result<user::Model, AppError> {
        Ok(self
            .user_dao
            .create_user(email, password_hash, role.as_str())
            .await?)
    }

    /// The caller's own stored record.
    pub async fn me(&self, caller: &Caller) -> Result<user::Model, AppError> {
        self.find_by_id(&caller.id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
