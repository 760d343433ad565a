//! Helpers that are not specific to any one backing store.

pub mod retry;

pub use retry::{RetryConfig, retry_with_backoff};
