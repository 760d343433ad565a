//! Connection management for the storefront's backing stores.
//!
//! Today that means MongoDB: a configurable connector with retrying startup,
//! a ping-based health check, and a shared timeout wrapper for collection
//! operations.
//!
//! # Features
//!
//! - `mongodb` (default) - the MongoDB connector
//! - `config` - `MongoConfig: FromEnv` support via `core_config`
//! - `all` - everything above
//!
//! # Connecting
//!
//! ```ignore
//! use database::mongodb;
//!
//! let client = mongodb::connect("mongodb://localhost:27017").await?;
//! let collection = client.database("storefront").collection::<Document>("products");
//! ```
//!
//! With environment-driven configuration and startup retries:
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::mongodb::{MongoConfig, connect_from_config_with_retry};
//!
//! let config = MongoConfig::from_env()?;
//! let client = connect_from_config_with_retry(&config, None).await?;
//! ```

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{RetryConfig, retry_with_backoff};
