pub mod auth_service;
pub mod category_service;
pub mod context;
pub mod todo_service;
pub mod user_service;

pub use auth_service::AuthService;
pub use category_service::{CategoryPatch, CategoryService, NewCategory};
pub use context::ServiceContext;
pub use todo_service::{NewTodoInput, TodoPatch, TodoService, TodoStatus};

use crate::error::AppError;

/// Trimmed value of a required text field.
pub(crate) fn required_text(field: &str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}
