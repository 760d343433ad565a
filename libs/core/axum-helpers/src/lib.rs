//! # Axum Helpers
//!
//! Everything the storefront HTTP services share that is not domain logic.
//!
//! ## Modules
//!
//! - **[`auth`]**: JWT verification, identity middleware and extractor
//! - **[`server`]**: Router assembly, health checks, graceful shutdown
//! - **[`http`]**: Security-header middleware
//! - **[`envelope`]**: The `{data, message}` response envelope and pagination meta
//! - **[`errors`]**: Error-to-response mapping in the same envelope
//! - **[`extractors`]**: UUID path and validated JSON extractors
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::server::ServerConfig;
//! use std::time::Duration;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_routes = Router::new(); // Add your routes
//!     let router = create_router::<ApiDoc>(api_routes).await?;
//!
//!     let config = ServerConfig::default();
//!     create_production_app(router, &config, Duration::from_secs(30), async {}).await?;
//!     Ok(())
//! }
//! ```

// Domain modules
pub mod auth;
pub mod envelope;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export auth types
pub use auth::{ACCESS_TOKEN_TTL, Identity, JwtAuth, JwtClaims, JwtConfig, resolve_identity};

// Re-export server types
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks,
};

// Re-export HTTP middleware
pub use http::security_headers;

// Re-export envelope types
pub use envelope::{ApiResponse, PageMeta, PagedResponse};

// Re-export error types
pub use errors::{AppError, ErrorResponse};

// Re-export extractors
pub use extractors::{UuidPath, ValidatedJson};
