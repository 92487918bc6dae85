use sea_orm::DatabaseConnection;

use crate::{
    auth::providers::AuthProviders,
    db::dao::{DaoContext, RefreshTokenDao},
    services::{
        auth_service::AuthService, category_service::CategoryService,
        todo_service::TodoService, user_service::UserService,
    },
};

/// Cheap to clone; every accessor hands out a service bound to the same pool.
#[derive(Clone)]
pub struct ServiceContext {
    daos: DaoContext,
}

impl ServiceContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self {
            daos: DaoContext::new(db),
        }
    }

    pub fn user(&self) -> UserService {
        UserService::new(self.daos.user())
    }

    pub fn todo(&self) -> TodoService {
        TodoService::new(self.daos.todo())
    }

    pub fn category(&self) -> CategoryService {
        CategoryService::new(self.daos.category())
    }

    pub fn auth<'a>(&self, providers: &'a AuthProviders) -> AuthService<'a> {
        AuthService::new(providers)
    }

    pub fn refresh_token_dao(&self) -> RefreshTokenDao {
        self.daos.refresh_token()
    }
}
