use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Order lifecycle status
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OrderStatus {
    /// Order placed, not yet fulfilled
    #[default]
    Pending,
    /// Order fulfilled
    Completed,
    /// Order cancelled
    Cancelled,
}

/// A single order line with the product name and price snapshotted at
/// placement time, so later product edits never rewrite order history.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Product name at placement time
    pub name: String,
    /// Product reference
    pub product_id: Uuid,
    /// Unit price at placement time
    pub price: f64,
    /// Quantity ordered
    pub qty: i32,
}

/// Order entity - represents a placed order stored in MongoDB
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Ordered line items, never empty
    pub order_items: Vec<OrderItem>,
    /// Sum of price * qty over all items, computed server-side
    pub grand_total: f64,
    /// Identity of the user who placed the order
    pub created_by: String,
    /// Current status
    pub status: OrderStatus,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// A single requested line item. Price and name are looked up server-side,
/// the caller only picks the product and quantity.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    /// Product to order
    pub product_id: Uuid,
    /// Quantity, between 1 and 5 per line
    #[validate(range(min = 1, max = 5))]
    pub qty: i32,
}

/// DTO for placing a new order
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[validate(length(min = 1), nested)]
    pub order_items: Vec<OrderItemRequest>,
}

/// Query parameters for a user's order history
#[derive(Debug, Clone, Deserialize, Validate, ToSchema, IntoParams)]
pub struct OrderHistoryQuery {
    /// Page size (1-based pagination)
    #[serde(default = "default_limit")]
    #[validate(range(min = 1))]
    pub limit: i64,
    /// Page number, starting at 1
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: i64,
    /// Case-insensitive match on item names or order status
    #[serde(default)]
    pub search: String,
}

fn default_limit() -> i64 {
    10
}

fn default_page() -> i64 {
    1
}

impl Default for OrderHistoryQuery {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            page: default_page(),
            search: String::new(),
        }
    }
}

impl OrderHistoryQuery {
    /// Number of documents to skip for the requested page
    pub fn skip(&self) -> u64 {
        ((self.page - 1) * self.limit).max(0) as u64
    }
}

impl Order {
    /// Create a new pending order, computing the grand total from the items
    pub fn new(order_items: Vec<OrderItem>, created_by: String) -> Self {
        let now = Utc::now();
        let grand_total = order_items
            .iter()
            .map(|item| item.price * item.qty as f64)
            .sum();

        Self {
            id: Uuid::now_v7(),
            order_items,
            grand_total,
            created_by,
            status: OrderStatus::default(),
            created_at: now,
            updated_at: now,
        }
    }
}
