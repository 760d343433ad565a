use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::mongodb::MongoError;
use domain_products::ProductError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Product not found: {0}")]
    ProductNotFound(Uuid),

    #[error("Insufficient quantity for product: {0}")]
    InsufficientStock(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Store operation '{0}' timed out")]
    Timeout(String),
}

pub type OrderResult<T> = Result<T, OrderError>;

/// Convert OrderError to AppError for standardized error responses
impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::ProductNotFound(id) => {
                AppError::NotFound(format!("Product not found: {id}"))
            }
            OrderError::InsufficientStock(name) => {
                AppError::Conflict(format!("Insufficient quantity for product: {name}"))
            }
            OrderError::Validation(msg) => AppError::BadRequest(msg),
            OrderError::Database(msg) => AppError::Database(msg),
            OrderError::Timeout(op) => AppError::Timeout(op),
        }
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

/// Reservation failures surface through the products domain and keep their
/// status mapping when an order is being placed.
impl From<ProductError> for OrderError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => OrderError::ProductNotFound(id),
            ProductError::InsufficientStock { name, .. } => OrderError::InsufficientStock(name),
            ProductError::Validation(msg) => OrderError::Validation(msg),
            ProductError::Database(msg) => OrderError::Database(msg),
            ProductError::Timeout(op) => OrderError::Timeout(op),
        }
    }
}

impl From<MongoError> for OrderError {
    fn from(err: MongoError) -> Self {
        match err {
            MongoError::Timeout(op) => OrderError::Timeout(op.to_string()),
            other => OrderError::Database(other.to_string()),
        }
    }
}
