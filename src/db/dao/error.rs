use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum DaoLayerError {
    #[error("Database error: {0}")]
    Db(DbErr),
    #[error("{entity} not found (id={id})")]
    NotFound { entity: &'static str, id: Uuid },
    #[error("Invalid pagination: page={page} page_size={page_size}")]
    InvalidPagination { page: u64, page_size: u64 },
    #[error("unique constraint violated")]
    UniqueViolation,
    #[error("foreign key references a missing row")]
    MissingReference,
}

pub type DaoResult<T> = Result<T, DaoLayerError>;

impl From<DbErr> for DaoLayerError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::UniqueViolation,
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => Self::MissingReference,
            _ => Self::Db(err),
        }
    }
}

/// Short entity name for messages, e.g. `todo_api::db::entities::todo::Entity` -> `Todo`.
pub(crate) fn entity_label<E>() -> &'static str {
    let full = std::any::type_name::<E>();
    let module = full
        .rsplit("::")
        .nth(1)
        .unwrap_or(full);
    match module {
        "todo" => "Todo",
        "category" => "Category",
        "user" => "User",
        "refresh_token" => "Refresh token",
        _ => module,
    }
}
