//! Orders Domain
//!
//! Order placement and per-user order history. Placing an order snapshots
//! product names and prices, reserves stock atomically per line, and rolls
//! every reservation back if any line or the final insert fails.
//!
//! Layering follows the other domains: [`handlers`] own the HTTP surface and
//! delegate to [`OrderService`], which runs the reservation loop and rollback
//! on top of two repository traits, its own [`OrderRepository`] and the
//! product-stock side of `domain_products`. MongoDB implementations live in
//! [`mongodb`], and [`models`] are shared by all layers.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_orders::{handlers, mongodb::MongoOrderRepository, service::OrderService};
//! use domain_products::MongoProductRepository;
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("storefront");
//!
//! // Orders need both repositories: their own and the product stock
//! let service = OrderService::new(
//!     MongoOrderRepository::new(&db),
//!     MongoProductRepository::new(&db),
//! );
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{OrderError, OrderResult};
pub use handlers::ApiDoc;
pub use models::{
    CreateOrderRequest, Order, OrderHistoryQuery, OrderItem, OrderItemRequest, OrderStatus,
};
pub use mongodb::MongoOrderRepository;
pub use repository::OrderRepository;
pub use service::OrderService;
