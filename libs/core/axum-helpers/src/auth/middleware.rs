use super::jwt::JwtAuth;
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

/// Extract JWT from Authorization header or cookie
fn extract_token_from_request(headers: &HeaderMap) -> Option<String> {
    // Try Authorization header first: "Bearer <token>"
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|auth| auth.strip_prefix("Bearer ").map(|s| s.to_string()))
        .or_else(|| {
            // Fallback to cookie: "access_token=<token>"
            headers
                .get("cookie")
                .and_then(|v| v.to_str().ok())
                .and_then(|cookies| {
                    cookies.split(';').find_map(|cookie| {
                        let parts: Vec<&str> = cookie.trim().splitn(2, '=').collect();
                        if parts.len() == 2 && parts[0] == "access_token" {
                            Some(parts[1].to_string())
                        } else {
                            None
                        }
                    })
                })
        })
}

/// Identity-resolving middleware
///
/// Reads the JWT from the Authorization header or cookies and, when the
/// signature verifies, inserts `JwtClaims` into the request extensions.
/// The request always proceeds; handlers that need an identity require it
/// through the `Identity` extractor, which rejects with 403 when no claims
/// were resolved. This keeps public routes (health, docs) on the same
/// router without a second middleware stack.
///
/// # Example
///
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::{JwtAuth, auth::resolve_identity};
///
/// let auth = JwtAuth::new(&config);
///
/// let app = Router::new()
///     .route("/api/orders", get(order_history))
///     .layer(axum::middleware::from_fn_with_state(
///         auth.clone(),
///         resolve_identity
///     ));
/// ```
pub async fn resolve_identity(
    State(auth): State<JwtAuth>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(token) = extract_token_from_request(&headers) {
        match auth.verify_token(&token) {
            Ok(claims) => {
                request.extensions_mut().insert(claims);
            }
            Err(e) => {
                tracing::debug!("JWT verification failed: {}", e);
            }
        }
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(name: &'static str, value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(name, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_extracts_bearer_token() {
        let headers = headers_with("authorization", "Bearer abc.def.ghi");
        assert_eq!(
            extract_token_from_request(&headers),
            Some("abc.def.ghi".to_string())
        );
    }

    #[test]
    fn test_rejects_non_bearer_scheme() {
        let headers = headers_with("authorization", "Basic dXNlcjpwYXNz");
        assert_eq!(extract_token_from_request(&headers), None);
    }

    #[test]
    fn test_extracts_access_token_cookie() {
        let headers = headers_with("cookie", "theme=dark; access_token=abc.def.ghi; lang=en");
        assert_eq!(
            extract_token_from_request(&headers),
            Some("abc.def.ghi".to_string())
        );
    }

    #[test]
    fn test_header_wins_over_cookie() {
        let mut headers = headers_with("authorization", "Bearer from-header");
        headers.insert(
            "cookie",
            HeaderValue::from_static("access_token=from-cookie"),
        );
        assert_eq!(
            extract_token_from_request(&headers),
            Some("from-header".to_string())
        );
    }

    #[test]
    fn test_no_token_anywhere() {
        assert_eq!(extract_token_from_request(&HeaderMap::new()), None);
    }
}
