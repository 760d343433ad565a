//! Bounded execution of store operations.
//!
//! Every repository call goes through [`with_timeout`] so a stuck MongoDB
//! deployment surfaces as a typed [`MongoError::Timeout`] instead of a
//! request that hangs until the client gives up.

use std::future::IntoFuture;
use std::time::Duration;

use super::connector::MongoError;

/// Upper bound for a single store operation.
pub const STORE_OP_TIMEOUT: Duration = Duration::from_secs(5);

/// Run a store operation with the standard timeout.
///
/// `op` names the operation for the timeout error and log line.
///
/// # Example
/// ```ignore
/// use database::mongodb::with_timeout;
///
/// let product = with_timeout("find_product_by_id", collection.find_one(filter)).await?;
/// ```
pub async fn with_timeout<T, F>(op: &'static str, fut: F) -> Result<T, MongoError>
where
    F: IntoFuture<Output = Result<T, mongodb::error::Error>>,
{
    with_timeout_after(op, STORE_OP_TIMEOUT, fut).await
}

/// Run a store operation with a caller-supplied timeout.
pub async fn with_timeout_after<T, F>(
    op: &'static str,
    timeout: Duration,
    fut: F,
) -> Result<T, MongoError>
where
    F: IntoFuture<Output = Result<T, mongodb::error::Error>>,
{
    match tokio::time::timeout(timeout, fut).await {
        Ok(result) => result.map_err(MongoError::from),
        Err(_) => {
            tracing::error!(operation = op, timeout = ?timeout, "Store operation timed out");
            Err(MongoError::Timeout(op))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fast_operation_passes_through() {
        let result = with_timeout("noop", async { Ok(42) }).await;
        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_slow_operation_times_out() {
        let result = with_timeout_after("stalled", Duration::from_millis(10), async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(())
        })
        .await;

        match result {
            Err(MongoError::Timeout(op)) => assert_eq!(op, "stalled"),
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_driver_error_is_not_swallowed() {
        use std::io;

        let result: Result<(), MongoError> = with_timeout("failing", async {
            Err(mongodb::error::Error::from(io::Error::other("boom")))
        })
        .await;

        assert!(matches!(result, Err(MongoError::Mongo(_))));
    }
}
