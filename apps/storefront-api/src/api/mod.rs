//! API routes module
//!
//! This module defines all HTTP API routes for the storefront.

pub mod categories;
pub mod orders;
pub mod products;

use axum::{Router, middleware};
use axum_helpers::{JwtAuth, resolve_identity};

use crate::state::AppState;

/// Create all API routes
/// Note: These are nested under /api by axum_helpers::create_router
pub fn routes(state: &AppState) -> Router {
    let auth = JwtAuth::new(&state.config.auth);

    Router::new()
        .nest("/categories", categories::router(state))
        .nest("/products", products::router(state))
        .nest("/orders", orders::router(state))
        // Resolve the caller's identity once for every API route. Handlers
        // that need it require it through the `Identity` extractor.
        .layer(middleware::from_fn_with_state(auth, resolve_identity))
}
