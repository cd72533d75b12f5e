/*
[INPUT]:  Encoded JWT access tokens
[OUTPUT]: Unverified payload claims (subject, expiry)
[POS]:    Auth layer - token introspection for display purposes
[UPDATE]: When the backend adds claims the clients need to read
*/

use base64::{
    Engine as _,
    engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD},
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::http::{AdminError, Result};

/// Claims carried by the backend's access and refresh tokens.
///
/// The signature is not verified here; the server remains the authority.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenClaims {
    /// User email the token was issued for
    pub sub: Option<String>,
    /// Expiry as unix seconds
    pub exp: Option<i64>,
}

impl TokenClaims {
    pub fn decode(token: &str) -> Result<Self> {
        let payload_b64 = token
            .trim()
            .split('.')
            .nth(1)
            .ok_or_else(|| AdminError::Authentication {
                message: "token is not a valid JWT".to_string(),
            })?;

        let payload_bytes = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .or_else(|_| URL_SAFE.decode(payload_b64))
            .map_err(|e| AdminError::Authentication {
                message: format!("invalid JWT payload base64: {e}"),
            })?;

        Ok(serde_json::from_slice(&payload_bytes)?)
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| DateTime::from_timestamp(exp, 0))
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().is_some_and(|expires| now >= expires)
    }
}

#[cfg(test)]
pub(crate) fn make_test_jwt(sub: &str, exp: i64) -> String {
    let header = serde_json::json!({"alg": "HS256", "typ": "JWT"});
    let payload = serde_json::json!({"sub": sub, "exp": exp});

    let header_b64 = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&header).unwrap());
    let payload_b64 = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&payload).unwrap());

    format!("{header_b64}.{payload_b64}.signature")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_claims() {
        let token = make_test_jwt("admin@example.com", 1_900_000_000);
        let claims = TokenClaims::decode(&token).unwrap();
        assert_eq!(claims.sub.as_deref(), Some("admin@example.com"));
        assert_eq!(claims.expires_at().unwrap().timestamp(), 1_900_000_000);
    }

    #[test]
    fn test_expiry_check() {
        let token = make_test_jwt("admin@example.com", 1_000);
        let claims = TokenClaims::decode(&token).unwrap();
        assert!(claims.is_expired_at(Utc::now()));
    }

    #[test]
    fn test_opaque_token_is_rejected() {
        let err = TokenClaims::decode("not-a-jwt").unwrap_err();
        assert!(err.is_auth_error());
    }
}
