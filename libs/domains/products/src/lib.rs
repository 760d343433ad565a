//! Products Domain
//!
//! Catalog products for the storefront: CRUD over `/api/products` plus the
//! atomic stock reservation that order placement relies on.
//!
//! Layering follows the other domains: [`handlers`] own the HTTP surface and
//! delegate to [`ProductService`], which validates input and applies the
//! business rules on top of the [`ProductRepository`] trait. The MongoDB
//! implementation lives in [`mongodb`], and [`models`] are shared by all
//! layers.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, mongodb::MongoProductRepository, service::ProductService};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Client::with_uri_str("mongodb://localhost:27017")
//!     .await?
//!     .database("storefront");
//!
//! let service = ProductService::new(MongoProductRepository::new(&db));
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

pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{CreateProduct, Product, ProductListQuery, UpdateProduct};
pub use mongodb::MongoProductRepository;
pub use repository::ProductRepository;
pub use service::ProductService;
