use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, FromQueryResult, IntoActiveModel, Order,
    PrimaryKeyTrait, QueryOrder, QuerySelect, Select,
};
use uuid::Uuid;

use super::base_traits::{HasCreatedAtColumn, HasIdActiveModel, TimestampedActiveModel};
use super::error::{DaoLayerError, DaoResult, entity_label};

#[derive(Debug)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub page: u64,
    pub page_size: u64,
    pub has_next: bool,
}

#[async_trait::async_trait]
pub trait DaoBase: Clone + Send + Sync + Sized
where
    <Self::Entity as EntityTrait>::Model:
        FromQueryResult + IntoActiveModel<<Self::Entity as EntityTrait>::ActiveModel> + Send + Sync,
    <Self::Entity as EntityTrait>::ActiveModel:
        ActiveModelTrait<Entity = Self::Entity> + HasIdActiveModel + TimestampedActiveModel + Send,
    <<Self::Entity as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType:
        From<Uuid> + Send + Sync,
    Self::Entity: HasCreatedAtColumn,
{
    type Entity: EntityTrait + Send + Sync;
    const MAX_PAGE_SIZE: u64 = 100;

    fn from_db(db: DatabaseConnection) -> Self;

    fn new(db: &DatabaseConnection) -> Self {
        Self::from_db(db.clone())
    }

    fn db(&self) -> &DatabaseConnection;

    async fn create(
        &self,
        data: impl IntoActiveModel<<Self::Entity as EntityTrait>::ActiveModel> + Send,
    ) -> DaoResult<<Self::Entity as EntityTrait>::Model> {
        let now = Utc::now().fixed_offset();
        let mut active = data.into_active_model();
        active.set_id(Uuid::new_v4());
        active.set_created_at(now);
        active.set_updated_at(now);
        Ok(active.insert(self.db()).await?)
    }

    async fn find_optional(
        &self,
        id: Uuid,
    ) -> DaoResult<Option<<Self::Entity as EntityTrait>::Model>> {
        Ok(Self::Entity::find_by_id(id).one(self.db()).await?)
    }

    async fn find_by_id(&self, id: Uuid) -> DaoResult<<Self::Entity as EntityTrait>::Model> {
        self.find_optional(id)
            .await?
            .ok_or(DaoLayerError::NotFound {
                entity: entity_label::<Self::Entity>(),
                id,
            })
    }

    async fn find(
        &self,
        page: u64,
        page_size: u64,
        order: Option<(<Self::Entity as EntityTrait>::Column, Order)>,
        apply: impl FnOnce(Select<Self::Entity>) -> Select<Self::Entity> + Send,
    ) -> DaoResult<Page<<Self::Entity as EntityTrait>::Model>> {
        if page == 0 || page_size == 0 || page_size > Self::MAX_PAGE_SIZE {
            return Err(DaoLayerError::InvalidPagination { page, page_size });
        }

        let offset = page.saturating_sub(1).saturating_mul(page_size);
        let mut data = Self::ordered(apply(Self::Entity::find()), order)
            .limit(page_size.saturating_add(1))
            .offset(offset)
            .all(self.db())
            .await?;

        let has_next = data.len() > page_size as usize;
        if has_next {
            data.truncate(page_size as usize);
        }

        Ok(Page {
            data,
            page,
            page_size,
            has_next,
        })
    }

    /// Every matching row in one query, for listings that are not paginated.
    async fn find_all(
        &self,
        order: Option<(<Self::Entity as EntityTrait>::Column, Order)>,
        apply: impl FnOnce(Select<Self::Entity>) -> Select<Self::Entity> + Send,
    ) -> DaoResult<Vec<<Self::Entity as EntityTrait>::Model>> {
        Ok(Self::ordered(apply(Self::Entity::find()), order)
            .all(self.db())
            .await?)
    }

    /// Newest first unless `order` says otherwise; `id` always breaks ties.
    fn ordered(
        select: Select<Self::Entity>,
        order: Option<(<Self::Entity as EntityTrait>::Column, Order)>,
    ) -> Select<Self::Entity> {
        let select = match order {
            Some((column, order)) => select.order_by(column, order),
            None => select.order_by_desc(Self::Entity::created_at_column()),
        };
        select.order_by_asc(Self::Entity::id_column())
    }

    /// Applies `apply` to an already loaded row and persists it, bumping `updated_at`.
    async fn save<F>(
        &self,
        model: <Self::Entity as EntityTrait>::Model,
        apply: F,
    ) -> DaoResult<<Self::Entity as EntityTrait>::Model>
    where
        F: for<'a> FnOnce(&'a mut <Self::Entity as EntityTrait>::ActiveModel) + Send,
    {
        let mut active = model.into_active_model();
        apply(&mut active);
        active.set_updated_at(Utc::now().fixed_offset());
        Ok(active.update(self.db()).await?)
    }

    async fn delete(&self, id: Uuid) -> DaoResult<Uuid> {
        let result = Self::Entity::delete_by_id(id).exec(self.db()).await?;

        if result.rows_affected == 0 {
            return Err(DaoLayerError::NotFound {
                entity: entity_label::<Self::Entity>(),
                id,
            });
        }

        Ok(id)
    }
}
