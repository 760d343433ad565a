//! Request identity extractor.

use axum::{extract::FromRequestParts, http::request::Parts};

use super::jwt::JwtClaims;
use crate::errors::AppError;

/// The verified identity attached to a request.
///
/// Populated from the `JwtClaims` that `resolve_identity` stored in the
/// request extensions. Extracting it on a request with no verified claims
/// rejects with 403 and the fixed `{"data": null, "message": "unauthorized"}`
/// body, so handlers can simply take `Identity` as an argument to make a
/// route owner-scoped.
///
/// # Example
/// ```ignore
/// use axum_helpers::Identity;
///
/// async fn order_history(identity: Identity) -> String {
///     format!("orders for {}", identity.user_id())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Identity(pub JwtClaims);

impl Identity {
    /// The stable user id, used to scope queries and stamp `created_by`.
    pub fn user_id(&self) -> &str {
        &self.0.sub
    }
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<JwtClaims>()
            .cloned()
            .map(Identity)
            .ok_or(AppError::Unauthorized)
    }
}
