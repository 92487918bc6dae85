use sea_orm::Set;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    auth::{Caller, Operation, authorize_owned},
    db::dao::{DaoBase, TodoDao, todo_dao::NewTodo},
    db::entities::todo,
    error::AppError,
};

use super::required_text;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    async_graphql::Enum,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl TodoStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TodoStatus::Pending => "PENDING",
            TodoStatus::InProgress => "IN_PROGRESS",
            TodoStatus::Completed => "COMPLETED",
        }
    }

    pub fn from_stored(value: &str) -> Self {
        TodoStatus::try_from(value).unwrap_or_default()
    }
}

impl TryFrom<&str> for TodoStatus {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "PENDING" => Ok(TodoStatus::Pending),
            "IN_PROGRESS" => Ok(TodoStatus::InProgress),
            "COMPLETED" => Ok(TodoStatus::Completed),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewTodoInput {
    pub title: String,
    pub description: Option<String>,
    pub status: Option<TodoStatus>,
    pub category_id: Option<Uuid>,
}

/// Merge-patch: `None` leaves a field alone, `Some(None)` clears a nullable one.
#[derive(Debug, Clone, Default)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub status: Option<TodoStatus>,
    pub category_id: Option<Option<Uuid>>,
}

#[derive(Clone)]
pub struct TodoService {
    todo_dao: TodoDao,
}

impl TodoService {
    pub fn new(todo_dao: TodoDao) -> Self {
        Self { todo_dao }
    }

    /// The caller becomes the owner; there is nothing to authorize.
    pub async fn create(&self, caller: &Caller, input: NewTodoInput) -> Result<todo::Model, AppError> {
        let title = required_text("title", &input.title)?;
        let todo = self
            .todo_dao
            .create_todo(NewTodo {
                title,
                description: input.description,
                status: input.status.unwrap_or_default().as_str().to_string(),
                user_id: caller.id,
                category_id: input.category_id,
            })
            .await?;
        tracing::debug!(todo_id = %todo.id, owner = %caller.id, "todo created");
        Ok(todo)
    }

    /// Filtered by owner in the query itself.
    pub async fn list(&self, caller: &Caller) -> Result<Vec<todo::Model>, AppError> {
        Ok(self.todo_dao.list_by_owner(caller.id).await?)
    }

    pub async fn find_one(&self, caller: &Caller, id: Uuid) -> Result<todo::Model, AppError> {
        self.load_owned(caller, id, Operation::Read).await
    }

    pub async fn update(
        &self,
        caller: &Caller,
        id: Uuid,
        patch: TodoPatch,
    ) -> Result<todo::Model, AppError> {
        let current = self.load_owned(caller, id, Operation::Update).await?;
        let title = patch
            .title
            .as_deref()
            .map(|title| required_text("title", title))
            .transpose()?;

        let updated = self
            .todo_dao
            .save(current, move |active| {
                if let Some(title) = title {
                    active.title = Set(title);
                }
                if let Some(description) = patch.description {
                    active.description = Set(description);
                }
                if let Some(status) = patch.status {
                    active.status = Set(status.as_str().to_string());
                }
                if let Some(category_id) = patch.category_id {
                    active.category_id = Set(category_id);
                }
            })
            .await?;
        Ok(updated)
    }

    /// Returns the record as it was before deletion.
    pub async fn remove(&self, caller: &Caller, id: Uuid) -> Result<todo::Model, AppError> {
        let snapshot = self.load_owned(caller, id, Operation::Delete).await?;
        self.todo_dao.delete(snapshot.id).await?;
        Ok(snapshot)
    }

    async fn load_owned(
        &self,
        caller: &Caller,
        id: Uuid,
        operation: Operation,
    ) -> Result<todo::Model, AppError> {
        let snapshot = self.todo_dao.find_optional(id).await?;
        authorize_owned(caller, snapshot, operation)
    }
}
