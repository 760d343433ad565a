use async_trait::async_trait;
use uuid::Uuid;

use crate::error::CategoryResult;
use crate::models::{Category, CreateCategory, UpdateCategory};

/// Repository trait for Category persistence
///
/// This trait defines the data access interface for categories.
/// Implementations can use different storage backends.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Create a new category
    async fn create(&self, input: CreateCategory) -> CategoryResult<Category>;

    /// Get a category by ID
    async fn get_by_id(&self, id: Uuid) -> CategoryResult<Option<Category>>;

    /// List all categories
    async fn list_all(&self) -> CategoryResult<Vec<Category>>;

    /// Update an existing category
    async fn update(&self, id: Uuid, input: UpdateCategory) -> CategoryResult<Category>;

    /// Delete a category by ID
    async fn delete(&self, id: Uuid) -> CategoryResult<bool>;

    /// Check if a category name exists
    async fn exists_by_name(&self, name: &str) -> CategoryResult<bool>;
}
