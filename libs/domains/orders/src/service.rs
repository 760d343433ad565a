//! Order Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use domain_products::ProductRepository;

use crate::error::{OrderError, OrderResult};
use crate::models::{CreateOrderRequest, Order, OrderHistoryQuery, OrderItem};
use crate::repository::OrderRepository;

/// Order service providing business logic operations
///
/// Placing an order reserves stock per line item through the products
/// repository. Reservations are atomic per product, so concurrent orders
/// never take the same unit twice. If any line fails, or the order itself
/// cannot be persisted, every reservation taken so far is released again.
pub struct OrderService<R: OrderRepository, P: ProductRepository> {
    repository: Arc<R>,
    products: Arc<P>,
}

impl<R: OrderRepository, P: ProductRepository> OrderService<R, P> {
    /// Create a new OrderService with the given repositories
    pub fn new(repository: R, products: P) -> Self {
        Self {
            repository: Arc::new(repository),
            products: Arc::new(products),
        }
    }

    /// Place a new order for a user
    ///
    /// Name and price on each line are snapshotted from the product as it
    /// was before the reservation, and the grand total is computed from
    /// those snapshots. Nothing from the request body besides product id
    /// and quantity reaches the stored order.
    #[instrument(skip(self, input), fields(item_count = input.order_items.len()))]
    pub async fn place_order(
        &self,
        created_by: &str,
        input: CreateOrderRequest,
    ) -> OrderResult<Order> {
        input
            .validate()
            .map_err(|e| OrderError::Validation(e.to_string()))?;

        let mut reserved: Vec<(Uuid, i32)> = Vec::with_capacity(input.order_items.len());
        let mut order_items = Vec::with_capacity(input.order_items.len());

        for item in &input.order_items {
            match self.products.reserve_stock(item.product_id, item.qty).await {
                Ok(snapshot) => {
                    reserved.push((item.product_id, item.qty));
                    order_items.push(OrderItem {
                        name: snapshot.name,
                        product_id: item.product_id,
                        price: snapshot.price,
                        qty: item.qty,
                    });
                }
                Err(err) => {
                    self.release_reserved(&reserved).await;
                    return Err(err.into());
                }
            }
        }

        let order = Order::new(order_items, created_by.to_string());

        match self.repository.insert(order).await {
            Ok(order) => Ok(order),
            Err(err) => {
                self.release_reserved(&reserved).await;
                Err(err)
            }
        }
    }

    /// List one page of the user's own orders with the total match count
    #[instrument(skip(self, query))]
    pub async fn order_history(
        &self,
        created_by: &str,
        query: OrderHistoryQuery,
    ) -> OrderResult<(Vec<Order>, u64)> {
        query
            .validate()
            .map_err(|e| OrderError::Validation(e.to_string()))?;

        let total = self
            .repository
            .count_by_user(created_by, &query.search)
            .await?;
        let orders = self.repository.find_by_user(created_by, query).await?;

        Ok((orders, total))
    }

    /// Return previously reserved quantities to their products
    ///
    /// Release failures are logged, not returned, so the error that
    /// triggered the rollback is the one the caller sees.
    async fn release_reserved(&self, reserved: &[(Uuid, i32)]) {
        for (product_id, qty) in reserved {
            if let Err(err) = self.products.release_stock(*product_id, *qty).await {
                tracing::error!(
                    product_id = %product_id,
                    qty = *qty,
                    error = %err,
                    "Failed to release reserved stock"
                );
            }
        }
    }
}

impl<R: OrderRepository, P: ProductRepository> Clone for OrderService<R, P> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            products: Arc::clone(&self.products),
        }
    }
}
