use async_trait::async_trait;

use crate::error::OrderResult;
use crate::models::{Order, OrderHistoryQuery};

/// Repository trait for Order persistence
///
/// This trait defines the data access interface for orders.
/// Implementations can use different storage backends.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persist a new order
    async fn insert(&self, order: Order) -> OrderResult<Order>;

    /// List one page of a user's orders, newest first
    async fn find_by_user(&self, user_id: &str, query: OrderHistoryQuery)
        -> OrderResult<Vec<Order>>;

    /// Count a user's orders matching a search term
    async fn count_by_user(&self, user_id: &str, search: &str) -> OrderResult<u64>;
}
