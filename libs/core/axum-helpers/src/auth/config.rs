//! JWT configuration.

use core_config::{ConfigError, FromEnv, env_required};

/// Shortest secret accepted for HS256 signing.
const MIN_SECRET_LEN: usize = 32;

/// Signing secret shared with the identity service that mints tokens.
///
/// Loaded from `JWT_SECRET`, which must be at least 32 characters.
///
/// # Example
///
/// ```ignore
/// use axum_helpers::JwtConfig;
/// use core_config::FromEnv;
///
/// let config = JwtConfig::from_env()?;
///
/// // Manual construction, mostly for tests
/// let config = JwtConfig::new("my-super-secret-key-that-is-at-least-32-chars");
/// ```
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
}

impl JwtConfig {
    /// Build a config from a known-good secret.
    ///
    /// # Panics
    /// Panics on a secret shorter than 32 characters. Use [`FromEnv`] for
    /// fallible loading.
    pub fn new(secret: impl Into<String>) -> Self {
        let secret = secret.into();
        assert!(
            secret.len() >= MIN_SECRET_LEN,
            "JWT secret must be at least {MIN_SECRET_LEN} characters"
        );
        Self { secret }
    }
}

impl FromEnv for JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let secret = env_required("JWT_SECRET")?;

        if secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::ParseError {
                key: "JWT_SECRET".to_string(),
                details: format!(
                    "must be at least {MIN_SECRET_LEN} characters (got {}). Generate one with: openssl rand -base64 32",
                    secret.len()
                ),
            });
        }

        Ok(Self { secret })
    }
}
