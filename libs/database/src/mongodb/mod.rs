//! MongoDB connector, health check, and the operation timeout wrapper.

mod config;
mod connector;
mod health;
mod ops;

pub use config::MongoConfig;
pub use connector::{
    MongoError, connect, connect_from_config, connect_from_config_with_retry, connect_with_retry,
};
pub use health::check_health;
pub use ops::{STORE_OP_TIMEOUT, with_timeout, with_timeout_after};

// Re-export the driver types callers need so they do not have to depend on
// the mongodb crate directly.
pub use mongodb::{Client, Collection, Database};
