/*
[INPUT]:  Operator credentials and HTTP client
[OUTPUT]: Stored session (access + refresh token)
[POS]:    Auth layer - orchestrates login, refresh and logout
[UPDATE]: When auth endpoints or flow steps change
*/

use reqwest::Method;

use crate::http::{AdminClient, AdminError, Result};
use crate::types::{LoginData, TokenPair};

use super::{Session, SessionStore};

const LOGIN_ENDPOINT: &str = "/admin/auth/login";

/// Manages the operator's authentication lifecycle
#[derive(Debug, Clone)]
pub struct AuthManager {
    client: AdminClient,
}

impl AuthManager {
    pub fn new(client: AdminClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &AdminClient {
        &self.client
    }

    pub fn store(&self) -> &SessionStore {
        self.client.session()
    }

    /// Exchange credentials for a token pair and persist it
    ///
    /// POST /admin/auth/login
    pub async fn login(&self, credentials: &LoginData) -> Result<TokenPair> {
        let builder = self
            .client
            .request(Method::POST, LOGIN_ENDPOINT)?
            .json(credentials);
        let tokens: TokenPair = self.client.send_json(builder).await?;

        if !tokens.is_complete() {
            return Err(AdminError::Authentication {
                message: "Response doesn't have tokens".to_string(),
            });
        }

        self.store()
            .set_tokens(tokens.access_token.clone(), tokens.refresh_token.clone())?;
        tracing::info!(email = %credentials.email, "logged in");
        Ok(tokens)
    }

    /// Refresh the access token explicitly. A failure clears the session.
    pub async fn refresh(&self) -> Result<()> {
        match self.client.refresh_access_token().await {
            Ok(_) => Ok(()),
            Err(err) => {
                tracing::warn!("explicit token refresh failed: {err}");
                self.store().clear()?;
                Err(AdminError::SessionExpired)
            }
        }
    }

    pub fn logout(&self) -> Result<()> {
        self.store().clear()?;
        tracing::info!("logged out");
        Ok(())
    }

    /// Load a persisted session. Returns whether one existed.
    pub fn restore(&self) -> bool {
        let restored = self.store().restore();
        if restored {
            tracing::debug!("restored persisted session");
        }
        restored
    }

    pub fn is_authenticated(&self) -> bool {
        self.store().is_authenticated()
    }

    pub fn session(&self) -> Option<Session> {
        self.store().session()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::ClientConfig;

    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn manager_for(server: &MockServer) -> AuthManager {
        AuthManager::new(AdminClient::with_config(ClientConfig::with_base_url(server.uri())).unwrap())
    }

    fn credentials() -> LoginData {
        LoginData {
            email: "admin@example.com".to_string(),
            password: "Secret123".to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_stores_tokens() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/admin/auth/login"))
            .and(body_json(serde_json::json!({
                "email": "admin@example.com",
                "password": "Secret123"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "access",
                "refresh_token": "refresh"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let auth = manager_for(&server);
        let tokens = auth.login(&credentials()).await.unwrap();
        assert_eq!(tokens.access_token, "access");
        assert!(auth.is_authenticated());
        assert_eq!(auth.store().refresh_token().as_deref(), Some("refresh"));
    }

    #[tokio::test]
    async fn test_login_without_tokens_fails() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/admin/auth/login"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"access_token": "a"})),
            )
            .mount(&server)
            .await;

        let auth = manager_for(&server);
        let err = auth.login(&credentials()).await.unwrap_err();
        assert_eq!(err.user_message(), "Response doesn't have tokens");
        assert!(!auth.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_rejected_uses_server_detail() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/admin/auth/login"))
            .respond_with(ResponseTemplate::new(401).set_body_json(
                serde_json::json!({"detail": "Incorrect username or password"}),
            ))
            .mount(&server)
            .await;

        let auth = manager_for(&server);
        let err = auth.login(&credentials()).await.unwrap_err();
        assert!(err.is_auth_error());
        assert_eq!(err.user_message(), "Incorrect username or password");
    }

    #[tokio::test]
    async fn test_refresh_failure_clears_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/admin/auth/token/refresh"))
            .and(query_param("refresh_token", "stale"))
            .respond_with(ResponseTemplate::new(401).set_body_json(
                serde_json::json!({"detail": "Invalid refresh token"}),
            ))
            .mount(&server)
            .await;

        let auth = manager_for(&server);
        auth.store()
            .set_tokens("access".to_string(), "stale".to_string())
            .unwrap();

        let err = auth.refresh().await.unwrap_err();
        assert!(matches!(err, AdminError::SessionExpired));
        assert!(auth.session().is_none());
    }

    #[test]
    fn test_logout_clears_session() {
        let auth = AuthManager::new(AdminClient::new().unwrap());
        auth.store()
            .set_tokens("access".to_string(), "refresh".to_string())
            .unwrap();
        auth.logout().unwrap();
        assert!(!auth.is_authenticated());
    }
}
