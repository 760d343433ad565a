//! Authentication and authorization module.
//!
//! This module provides:
//! - JWT token creation and verification with a shared secret
//! - Identity-resolving middleware that attaches claims to requests
//! - The `Identity` extractor for owner-scoped handlers
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::auth::{Identity, JwtAuth, JwtConfig, resolve_identity};
//! use core_config::FromEnv;
//!
//! // Load config and create auth instance
//! let config = JwtConfig::from_env()?;
//! let auth = JwtAuth::new(&config);
//!
//! // Resolve identities once for the whole router; handlers opt in
//! // to authentication by taking `Identity` as an argument.
//! let app = Router::new()
//!     .route("/api/orders", get(order_history))
//!     .layer(axum::middleware::from_fn_with_state(auth, resolve_identity));
//! ```

pub mod config;
pub mod identity;
pub mod jwt;
pub mod middleware;

// Re-export commonly used types
pub use config::JwtConfig;
pub use identity::Identity;
pub use jwt::{ACCESS_TOKEN_TTL, JwtAuth, JwtClaims};
pub use middleware::resolve_identity;
