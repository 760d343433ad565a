use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, ProductListQuery, UpdateProduct};

/// Repository trait for Product persistence
///
/// This trait defines the data access interface for products.
/// Implementations can use different storage backends.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Create a new product
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Get a product by ID
    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// List products for one result page, newest first
    async fn list(&self, query: ProductListQuery) -> ProductResult<Vec<Product>>;

    /// Count products matching a search term
    async fn count(&self, search: &str) -> ProductResult<u64>;

    /// Update an existing product
    async fn update(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Product>;

    /// Delete a product by ID
    async fn delete(&self, id: Uuid) -> ProductResult<bool>;

    /// Atomically decrement available quantity if enough is on hand.
    ///
    /// Returns the product as it was before the decrement, so callers can
    /// snapshot `name` and `price`. Fails with `InsufficientStock` when the
    /// available quantity is below `qty`, without changing anything.
    async fn reserve_stock(&self, id: Uuid, qty: i32) -> ProductResult<Product>;

    /// Return previously reserved quantity to the product
    async fn release_stock(&self, id: Uuid, qty: i32) -> ProductResult<()>;
}
