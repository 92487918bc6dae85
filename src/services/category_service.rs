use sea_orm::Set;
use uuid::Uuid;

use crate::{
    auth::{Caller, Operation, authorize_role},
    db::dao::{CategoryDao, DaoBase},
    db::entities::category,
    error::AppError,
};

use super::required_text;

#[derive(Debug, Clone, Default)]
pub struct NewCategory {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
}

/// Categories are shared: anyone signed in may read them, only admins may change them.
#[derive(Clone)]
pub struct CategoryService {
    category_dao: CategoryDao,
}

impl CategoryService {
    pub fn new(category_dao: CategoryDao) -> Self {
        Self { category_dao }
    }

    pub async fn create(
        &self,
        caller: &Caller,
        input: NewCategory,
    ) -> Result<category::Model, AppError> {
        authorize_role(caller, Operation::Create)?;
        let name = required_text("name", &input.name)?;
        let category = self
            .category_dao
            .create_category(name, input.description)
            .await?;
        tracing::info!(category_id = %category.id, admin = %caller.id, "category created");
        Ok(category)
    }

    pub async fn list(&self, caller: &Caller) -> Result<Vec<category::Model>, AppError> {
        authorize_role(caller, Operation::List)?;
        Ok(self.category_dao.list_all().await?)
    }

    pub async fn find_one(&self, caller: &Caller, id: Uuid) -> Result<category::Model, AppError> {
        authorize_role(caller, Operation::Read)?;
        Ok(self.category_dao.find_by_id(id).await?)
    }

    pub async fn update(
        &self,
        caller: &Caller,
        id: Uuid,
        patch: CategoryPatch,
    ) -> Result<category::Model, AppError> {
        authorize_role(caller, Operation::Update)?;
        let current = self.category_dao.find_by_id(id).await?;
        let name = patch
            .name
            .as_deref()
            .map(|name| required_text("name", name))
            .transpose()?;

        Ok(self
            .category_dao
            .save(current, move |active| {
                if let Some(name) = name {
                    active.name = Set(name);
                }
                if let Some(description) = patch.description {
                    active.description = Set(description);
                }
            })
            .await?)
    }

    /// Todos pointing at the category are detached by the store, not deleted.
    pub async fn remove(&self, caller: &Caller, id: Uuid) -> Result<category::Model, AppError> {
        authorize_role(caller, Operation::Delete)?;
        let snapshot = self.category_dao.find_by_id(id).await?;
        self.category_dao.delete(id).await?;
        tracing::info!(category_id = %id, admin = %caller.id, "category removed");
        Ok(snapshot)
    }
}
