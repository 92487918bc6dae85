use crate::db::dao::DaoLayerError;

pub const INTERNAL_MESSAGE: &str = "database operation failed. Please check the logs for more details";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    Unauthenticated(String),
    Forbidden(String),
    NotFound(String),
    Validation(String),
    Conflict(String),
    Internal(String),
}

impl AppError {
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Unauthenticated(message)
            | Self::Forbidden(message)
            | Self::NotFound(message)
            | Self::Validation(message)
            | Self::Conflict(message)
            | Self::Internal(message) => message.as_str(),
        }
    }

    /// Stable, machine-readable kind surfaced to API callers.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthenticated(_) => "UNAUTHENTICATED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION",
            Self::Conflict(_) => "CONFLICT",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AppError {}

impl From<DaoLayerError> for AppError {
    fn from(err: DaoLayerError) -> Self {
        match err {
            DaoLayerError::NotFound { entity, .. } => {
                AppError::not_found(format!("{entity} not found"))
            }
            DaoLayerError::InvalidPagination { .. } => AppError::validation(err.to_string()),
            DaoLayerError::UniqueViolation => AppError::conflict("Resource already exists"),
            DaoLayerError::MissingReference => {
                AppError::validation("Referenced record does not exist")
            }
            DaoLayerError::Db(db_err) => {
                tracing::error!(error = %db_err, "database operation failed");
                AppError::internal(INTERNAL_MESSAGE)
            }
        }
    }
}
