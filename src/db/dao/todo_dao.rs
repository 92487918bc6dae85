use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter, Set};
use uuid::Uuid;

use super::{DaoBase, DaoResult};
use crate::db::entities::{prelude::Todo, todo};

#[derive(Clone)]
pub struct TodoDao {
    db: DatabaseConnection,
}

impl DaoBase for TodoDao {
    type Entity = Todo;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

pub struct NewTodo {
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub user_id: Uuid,
    pub category_id: Option<Uuid>,
}

impl TodoDao {
    pub async fn create_todo(&self, input: NewTodo) -> DaoResult<todo::Model> {
        let model = todo::ActiveModel {
            title: Set(input.title),
            description: Set(input.description),
            status: Set(input.status),
            user_id: Set(input.user_id),
            category_id: Set(input.category_id),
            ..Default::default()
        };
        self.create(model).await
    }

    /// Every todo owned by `user_id`, newest first, read in a single query.
    pub async fn list_by_owner(&self, user_id: Uuid) -> DaoResult<Vec<todo::Model>> {
        self.find_all(None, move |query| {
            query.filter(todo::Column::UserId.eq(user_id))
        })
        .await
    }
}
