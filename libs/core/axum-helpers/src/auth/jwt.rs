use super::config::JwtConfig;
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access token lifetime in seconds (15 minutes).
pub const ACCESS_TOKEN_TTL: i64 = 900;

/// Claims carried in every access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Subject: the user id.
    pub sub: String,
    pub email: String,
    pub name: String,
    pub roles: Vec<String>,
    /// Expiry as a unix timestamp.
    pub exp: i64,
    /// Issued-at as a unix timestamp.
    pub iat: i64,
    /// Token id, unique per issued token.
    pub jti: String,
}

/// Stateless JWT authentication.
///
/// Tokens are issued by an external identity service signed with a shared
/// secret; this side only verifies signatures and reads claims.
#[derive(Clone)]
pub struct JwtAuth {
    secret: String,
}

impl JwtAuth {
    /// Create a new JWT auth instance.
    ///
    /// ```ignore
    /// use axum_helpers::{JwtAuth, JwtConfig};
    /// use core_config::FromEnv;
    ///
    /// let jwt_auth = JwtAuth::new(&JwtConfig::from_env()?);
    /// ```
    pub fn new(config: &JwtConfig) -> Self {
        tracing::info!("JWT auth initialized");
        Self {
            secret: config.secret.clone(),
        }
    }

    /// Mint an HS256 access token valid for [`ACCESS_TOKEN_TTL`] seconds.
    ///
    /// Production tokens come from the identity service; this exists for
    /// integration tests and local tooling that need a valid token.
    pub fn create_access_token(
        &self,
        user_id: &str,
        email: &str,
        name: &str,
        roles: &[String],
    ) -> eyre::Result<String> {
        let now = Utc::now();
        let claims = JwtClaims {
            sub: user_id.to_string(),
            email: email.to_string(),
            name: name.to_string(),
            roles: roles.to_vec(),
            exp: (now + Duration::seconds(ACCESS_TOKEN_TTL)).timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(
            &Header::new(jsonwebtoken::Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;

        Ok(token)
    }

    /// Verify the signature and expiry of `token` and return its claims.
    pub fn verify_token(&self, token: &str) -> eyre::Result<JwtClaims> {
        let decoded = decode::<JwtClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth() -> JwtAuth {
        JwtAuth::new(&JwtConfig::new("test-secret-with-at-least-32-characters"))
    }

    #[test]
    fn test_access_token_round_trip() {
        let auth = auth();
        let token = auth
            .create_access_token("user-1", "user@example.com", "User One", &[])
            .unwrap();

        let claims = auth.verify_token(&token).unwrap();
        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.email, "user@example.com");
        assert_eq!(claims.name, "User One");
        assert!(claims.exp > claims.iat);
        assert_eq!(claims.exp - claims.iat, ACCESS_TOKEN_TTL);
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let token = auth()
            .create_access_token("user-1", "user@example.com", "User One", &[])
            .unwrap();

        let other = JwtAuth::new(&JwtConfig::new("a-different-secret-also-32-chars-long"));
        assert!(other.verify_token(&token).is_err());
    }

    #[test]
    fn test_verify_rejects_garbage() {
        assert!(auth().verify_token("not.a.token").is_err());
    }

    #[test]
    fn test_tokens_get_unique_jti() {
        let auth = auth();
        let a = auth
            .create_access_token("user-1", "user@example.com", "User One", &[])
            .unwrap();
        let b = auth
            .create_access_token("user-1", "user@example.com", "User One", &[])
            .unwrap();

        let jti_a = auth.verify_token(&a).unwrap().jti;
        let jti_b = auth.verify_token(&b).unwrap().jti;
        assert_ne!(jti_a, jti_b);
    }
}
