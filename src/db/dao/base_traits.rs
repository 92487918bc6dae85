use sea_orm::entity::prelude::DateTimeWithTimeZone;

/// Implemented by `#[base_entity]` for every entity; used by [`super::DaoBase`]
/// to order listings. `id` breaks ties so the order is total.
pub trait HasCreatedAtColumn: sea_orm::EntityTrait {
    fn created_at_column() -> Self::Column;

    fn id_column() -> Self::Column;
}

pub trait HasIdActiveModel {
    fn set_id(&mut self, id: uuid::Uuid);
}

pub trait TimestampedActiveModel {
    fn set_created_at(&mut self, ts: DateTimeWithTimeZone);
    fn set_updated_at(&mut self, ts: DateTimeWithTimeZone);
}
