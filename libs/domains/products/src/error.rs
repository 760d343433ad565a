use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::mongodb::MongoError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(Uuid),

    #[error("Insufficient quantity for product: {name}")]
    InsufficientStock {
        name: String,
        available: i32,
        requested: i32,
    },

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Store operation '{0}' timed out")]
    Timeout(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => AppError::NotFound(format!("Product not found: {id}")),
            ProductError::InsufficientStock { name, .. } => {
                AppError::Conflict(format!("Insufficient quantity for product: {name}"))
            }
            ProductError::Validation(msg) => AppError::BadRequest(msg),
            ProductError::Database(msg) => AppError::Database(msg),
            ProductError::Timeout(op) => AppError::Timeout(op),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<MongoError> for ProductError {
    fn from(err: MongoError) -> Self {
        match err {
            MongoError::Timeout(op) => ProductError::Timeout(op.to_string()),
            other => ProductError::Database(other.to_string()),
        }
    }
}
