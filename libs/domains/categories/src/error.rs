use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::mongodb::MongoError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CategoryError {
    #[error("Category not found: {0}")]
    NotFound(Uuid),

    #[error("Category with name '{0}' already exists")]
    DuplicateName(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Store operation '{0}' timed out")]
    Timeout(String),
}

pub type CategoryResult<T> = Result<T, CategoryError>;

/// Convert CategoryError to AppError for standardized error responses
impl From<CategoryError> for AppError {
    fn from(err: CategoryError) -> Self {
        match err {
            CategoryError::NotFound(id) => AppError::NotFound(format!("Category not found: {id}")),
            CategoryError::DuplicateName(name) => {
                AppError::Conflict(format!("Category with name '{name}' already exists"))
            }
            CategoryError::Validation(msg) => AppError::BadRequest(msg),
            CategoryError::Database(msg) => AppError::Database(msg),
            CategoryError::Timeout(op) => AppError::Timeout(op),
        }
    }
}

impl IntoResponse for CategoryError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<MongoError> for CategoryError {
    fn from(err: MongoError) -> Self {
        match err {
            MongoError::Timeout(op) => CategoryError::Timeout(op.to_string()),
            other => CategoryError::Database(other.to_string()),
        }
    }
}
