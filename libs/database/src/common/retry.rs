//! Connection retry with exponential backoff.
//!
//! MongoDB routinely comes up slower than this service under docker compose
//! and during k8s rollouts, so the connector retries the initial connection
//! instead of crash-looping. The delay doubles per attempt up to a cap, with
//! jitter so a fleet of replicas does not reconnect in lockstep.

use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Backoff schedule for connection attempts.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retries after the initial attempt
    pub max_retries: u32,

    /// Delay before the first retry, in milliseconds
    pub initial_delay_ms: u64,

    /// Ceiling for the computed delay, in milliseconds
    pub max_delay_ms: u64,

    /// Growth factor applied to the delay after each failed attempt
    pub backoff_multiplier: f64,

    /// Randomize each delay to 50-100% of its computed value
    pub use_jitter: bool,
}

impl RetryConfig {
    /// Default schedule: 3 retries, 100ms doubling up to 5s, with jitter.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_initial_delay(mut self, delay_ms: u64) -> Self {
        self.initial_delay_ms = delay_ms;
        self
    }

    pub fn with_max_delay(mut self, delay_ms: u64) -> Self {
        self.max_delay_ms = delay_ms;
        self
    }

    pub fn without_jitter(mut self) -> Self {
        self.use_jitter = false;
        self
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay_ms: 100,
            max_delay_ms: 5000,
            backoff_multiplier: 2.0,
            use_jitter: true,
        }
    }
}

/// Run `operation` until it succeeds or the schedule is exhausted.
///
/// Returns the last error once `max_retries` retries have been spent.
///
/// # Example
/// ```ignore
/// use database::common::{RetryConfig, retry_with_backoff};
///
/// let client = retry_with_backoff(
///     || database::mongodb::connect(&mongo_url),
///     RetryConfig::new().with_max_retries(5),
/// )
/// .await?;
/// ```
pub async fn retry_with_backoff<F, Fut, T, E>(mut operation: F, config: RetryConfig) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut attempt = 0u32;
    let mut delay_ms = config.initial_delay_ms;

    loop {
        match operation().await {
            Ok(value) => {
                if attempt > 0 {
                    debug!(retries = attempt, "Connection established after retrying");
                }
                return Ok(value);
            }
            Err(err) => {
                if attempt >= config.max_retries {
                    warn!(
                        attempts = attempt + 1,
                        error = %err,
                        "Connection failed, retries exhausted"
                    );
                    return Err(err);
                }
                attempt += 1;

                let sleep_ms = if config.use_jitter {
                    jittered(delay_ms)
                } else {
                    delay_ms
                };
                debug!(
                    attempt,
                    max_retries = config.max_retries,
                    retry_in_ms = sleep_ms,
                    error = %err,
                    "Connection attempt failed"
                );
                tokio::time::sleep(Duration::from_millis(sleep_ms)).await;

                delay_ms = ((delay_ms as f64 * config.backoff_multiplier) as u64)
                    .min(config.max_delay_ms);
            }
        }
    }
}

/// Scale a delay to 50-100% of its value.
///
/// Hashing the current instant avoids pulling in a rand dependency for a
/// one-line jitter.
fn jittered(delay_ms: u64) -> u64 {
    use std::collections::hash_map::RandomState;
    use std::hash::BuildHasher;

    let factor =
        (RandomState::new().hash_one(std::time::SystemTime::now()) % 50) as f64 / 100.0 + 0.5;
    (delay_ms as f64 * factor) as u64
}
