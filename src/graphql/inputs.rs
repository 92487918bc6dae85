use async_graphql::{InputObject, MaybeUndefined};
use uuid::Uuid;

use crate::services::{CategoryPatch, NewCategory, NewTodoInput, TodoPatch, TodoStatus};

#[derive(InputObject)]
pub struct SignupInput {
    pub email: String,
    pub password: String,
}

#[derive(InputObject)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(InputObject)]
pub struct CreateTodoInput {
    pub title: String,
    pub description: Option<String>,
    pub status: Option<TodoStatus>,
    pub category_id: Option<Uuid>,
}

/// Absent fields stay as they are; `null` clears `description` or `categoryId`.
#[derive(InputObject)]
pub struct UpdateTodoInput {
    pub id: Uuid,
    pub title: Option<String>,
    pub description: MaybeUndefined<String>,
    pub status: Option<TodoStatus>,
    pub category_id: MaybeUndefined<Uuid>,
}

#[derive(InputObject)]
pub struct CreateCategoryInput {
    pub name: String,
    pub description: Option<String>,
}

#[derive(InputObject)]
pub struct UpdateCategoryInput {
    pub id: Uuid,
    pub name: Option<String>,
    pub description: MaybeUndefined<String>,
}

fn patch_field<T>(value: MaybeUndefined<T>) -> Option<Option<T>> {
    match value {
        MaybeUndefined::Undefined => None,
        MaybeUndefined::Null => Some(None),
        MaybeUndefined::Value(value) => Some(Some(value)),
    }
}

impl From<CreateTodoInput> for NewTodoInput {
    fn from(input: CreateTodoInput) -> Self {
        Self {
            title: input.title,
            description: input.description,
            status: input.status,
            category_id: input.category_id,
        }
    }
}

impl UpdateTodoInput {
    pub fn into_parts(self) -> (Uuid, TodoPatch) {
        let patch = TodoPatch {
            title: self.title,
            description: patch_field(self.description),
            status: self.status,
            category_id: patch_field(self.category_id),
        };
        (self.id, patch)
    }
}

impl From<CreateCategoryInput> for NewCategory {
    fn from(input: CreateCategoryInput) -> Self {
        Self {
            name: input.name,
            description: input.description,
        }
    }
}

impl UpdateCategoryInput {
    pub fn into_parts(self) -> (Uuid, CategoryPatch) {
        let patch = CategoryPatch {
            name: self.name,
            description: patch_field(self.description),
        };
        (self.id, patch)
    }
}
