//! HTTP-level middleware.
//!
//! Currently just [`security_headers`], applied as a layer:
//!
//! ```ignore
//! use axum_helpers::http::security_headers;
//!
//! let app = Router::new().layer(axum::middleware::from_fn(security_headers));
//! ```

pub mod security;

pub use security::security_headers;
