use async_graphql::{Context, Object, ResultExt};
use uuid::Uuid;

use super::{
    context::{caller, services},
    inputs::{CreateCategoryInput, UpdateCategoryInput},
    types::CategoryType,
};

#[derive(Default)]
pub struct CategoryQuery;

#[Object]
impl CategoryQuery {
    async fn categories(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<CategoryType>> {
        let caller = caller(ctx)?;
        let categories = services(ctx)?.category().list(caller).await.extend()?;
        Ok(categories.into_iter().map(CategoryType).collect())
    }

    async fn category(&self, ctx: &Context<'_>, id: Uuid) -> async_graphql::Result<CategoryType> {
        let caller = caller(ctx)?;
        let category = services(ctx)?
            .category()
            .find_one(caller, id)
            .await
            .extend()?;
        Ok(CategoryType(category))
    }
}

/// Every mutation here requires the `ADMIN` role.
#[derive(Default)]
pub struct CategoryMutation;

#[Object]
impl CategoryMutation {
    async fn create_category(
        &self,
        ctx: &Context<'_>,
        create_category_input: CreateCategoryInput,
    ) -> async_graphql::Result<CategoryType> {
        let caller = caller(ctx)?;
        let category = services(ctx)?
            .category()
            .create(caller, create_category_input.into())
            .await
            .extend()?;
        Ok(CategoryType(category))
    }

    async fn update_category(
        &self,
        ctx: &Context<'_>,
        update_category_input: UpdateCategoryInput,
    ) -> async_graphql::Result<CategoryType> {
        let caller = caller(ctx)?;
        let (id, patch) = update_category_input.into_parts();
        let category = services(ctx)?
            .category()
            .update(caller, id, patch)
            .await
            .extend()?;
        Ok(CategoryType(category))
    }

    async fn remove_category(
        &self,
        ctx: &Context<'_>,
        id: Uuid,
    ) -> async_graphql::Result<CategoryType> {
        let caller = caller(ctx)?;
        let category = services(ctx)?.category().remove(caller, id).await.extend()?;
        Ok(CategoryType(category))
    }
}
