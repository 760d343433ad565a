//! Category Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{CategoryError, CategoryResult};
use crate::models::{Category, CreateCategory, UpdateCategory};
use crate::repository::CategoryRepository;

/// Category service providing business logic operations
///
/// The service layer handles validation, business rules, and orchestrates
/// repository operations.
pub struct CategoryService<R: CategoryRepository> {
    repository: Arc<R>,
}

impl<R: CategoryRepository> CategoryService<R> {
    /// Create a new CategoryService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new category
    #[instrument(skip(self, input), fields(category_name = %input.name))]
    pub async fn create_category(&self, input: CreateCategory) -> CategoryResult<Category> {
        input
            .validate()
            .map_err(|e| CategoryError::Validation(e.to_string()))?;

        if self.repository.exists_by_name(&input.name).await? {
            return Err(CategoryError::DuplicateName(input.name.clone()));
        }

        self.repository.create(input).await
    }

    /// Get a category by ID
    #[instrument(skip(self))]
    pub async fn get_category(&self, id: Uuid) -> CategoryResult<Category> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(CategoryError::NotFound(id))
    }

    /// List all categories
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> CategoryResult<Vec<Category>> {
        self.repository.list_all().await
    }

    /// Update an existing category
    #[instrument(skip(self, input))]
    pub async fn update_category(
        &self,
        id: Uuid,
        input: UpdateCategory,
    ) -> CategoryResult<Category> {
        input
            .validate()
            .map_err(|e| CategoryError::Validation(e.to_string()))?;

        let existing = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(CategoryError::NotFound(id))?;

        // Check for duplicate name if being changed
        if let Some(ref new_name) = input.name {
            if new_name != &existing.name && self.repository.exists_by_name(new_name).await? {
                return Err(CategoryError::DuplicateName(new_name.clone()));
            }
        }

        self.repository.update(id, input).await
    }

    /// Delete a category, returning the removed document
    #[instrument(skip(self))]
    pub async fn delete_category(&self, id: Uuid) -> CategoryResult<Category> {
        let existing = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(CategoryError::NotFound(id))?;

        self.repository.delete(id).await?;
        Ok(existing)
    }
}

impl<R: CategoryRepository> Clone for CategoryService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
