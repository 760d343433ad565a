//! Categories Domain
//!
//! Product categories for the storefront catalog: CRUD over
//! `/api/categories` with unique names and an unpaginated listing.
//!
//! Layering follows the other domains: [`handlers`] own the HTTP surface and
//! delegate to [`CategoryService`], which validates input on top of the
//! [`CategoryRepository`] trait. The MongoDB implementation lives in
//! [`mongodb`], and [`models`] are shared by all layers.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{CategoryError, CategoryResult};
pub use handlers::ApiDoc;
pub use models::{Category, CreateCategory, UpdateCategory};
pub use mongodb::MongoCategoryRepository;
pub use repository::CategoryRepository;
pub use service::CategoryService;
