use async_graphql::{Context, Object, ResultExt};
use uuid::Uuid;

use super::{
    context::{caller, services},
    inputs::{CreateTodoInput, UpdateTodoInput},
    types::TodoType,
};

#[derive(Default)]
pub struct TodoQuery;

#[Object]
impl TodoQuery {
    /// The caller's own todos, newest first.
    async fn todos(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<TodoType>> {
        let caller = caller(ctx)?;
        let todos = services(ctx)?.todo().list(caller).await.extend()?;
        Ok(todos.into_iter().map(TodoType).collect())
    }

    async fn todo(&self, ctx: &Context<'_>, id: Uuid) -> async_graphql::Result<TodoType> {
        let caller = caller(ctx)?;
        let todo = services(ctx)?.todo().find_one(caller, id).await.extend()?;
        Ok(TodoType(todo))
    }
}

#[derive(Default)]
pub struct TodoMutation;

#[Object]
impl TodoMutation {
    async fn create_todo(
        &self,
        ctx: &Context<'_>,
        create_todo_input: CreateTodoInput,
    ) -> async_graphql::Result<TodoType> {
        let caller = caller(ctx)?;
        let todo = services(ctx)?
            .todo()
            .create(caller, create_todo_input.into())
            .await
            .extend()?;
        Ok(TodoType(todo))
    }

    async fn update_todo(
        &self,
        ctx: &Context<'_>,
        update_todo_input: UpdateTodoInput,
    ) -> async_graphql::Result<TodoType> {
        let caller = caller(ctx)?;
        let (id, patch) = update_todo_input.into_parts();
        let todo = services(ctx)?
            .todo()
            .update(caller, id, patch)
            .await
            .extend()?;
        Ok(TodoType(todo))
    }

    /// Returns the todo as it was before removal.
    async fn remove_todo(&self, ctx: &Context<'_>, id: Uuid) -> async_graphql::Result<TodoType> {
        let caller = caller(ctx)?;
        let todo = services(ctx)?.todo().remove(caller, id).await.extend()?;
        Ok(TodoType(todo))
    }
}
