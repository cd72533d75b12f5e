/*
[INPUT]:  HTTP configuration (base URL, timeouts) and the shared session store
[OUTPUT]: Configured reqwest client with bearer auth and token-refresh replay
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing interceptor behavior
*/

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::auth::SessionStore;
use crate::http::{AdminError, Result};
use crate::types::RefreshResponse;

/// Default API location, matching the backend's development server
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

pub(crate) const REFRESH_ENDPOINT: &str = "/admin/auth/token/refresh";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// Main HTTP client for the admin API
#[derive(Debug, Clone)]
pub struct AdminClient {
    http_client: Client,
    base_url: Url,
    session: SessionStore,
}

impl AdminClient {
    /// Create a new client with default configuration and an in-memory session
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_session(config, SessionStore::new())
    }

    /// Create a client sharing an existing (possibly file-backed) session
    pub fn with_session(config: ClientConfig, session: SessionStore) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: normalize_base_url(&config.base_url)?,
            session,
        })
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build full URL for an API endpoint, keeping any path prefix of the base URL
    fn url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint.trim_start_matches('/'))?)
    }

    /// Build an unauthenticated request builder
    pub(crate) fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.url(endpoint)?;
        Ok(self.http_client.request(method, url))
    }

    /// Send a request without the auth interceptor and decode the JSON body
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        decode_response(response).await
    }

    /// Send a request through the auth interceptor.
    ///
    /// Attaches the bearer token, and when the server reports an expired
    /// access token (409) refreshes it once and replays the request. A failed
    /// refresh clears the session and yields [`AdminError::SessionExpired`].
    pub(crate) async fn send_authorized<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T> {
        let replay = builder.try_clone();
        let response = self.dispatch(builder, self.session.access_token()).await?;
        if response.status() != StatusCode::CONFLICT {
            return decode_response(response).await;
        }

        let Some(replay) = replay else {
            return Err(AdminError::TokenExpired);
        };

        tracing::info!(url = %response.url().path(), "access token expired, refreshing");
        let access_token = match self.refresh_access_token().await {
            Ok(token) => token,
            Err(err) => {
                tracing::warn!("token refresh failed, clearing session: {err}");
                self.session.clear()?;
                return Err(AdminError::SessionExpired);
            }
        };

        let retried = self.dispatch(replay, Some(access_token)).await?;
        decode_response(retried).await
    }

    /// Exchange the stored refresh token for a new access token
    ///
    /// POST /admin/auth/token/refresh?refresh_token={refresh_token}
    pub async fn refresh_access_token(&self) -> Result<String> {
        let refresh_token = self
            .session
            .refresh_token()
            .ok_or(AdminError::SessionExpired)?;

        let builder = self
            .request(Method::POST, REFRESH_ENDPOINT)?
            .query(&[("refresh_token", refresh_token)]);
        let response: RefreshResponse = self.send_json(builder).await?;

        self.session
            .replace_access_token(response.access_token.clone())?;
        tracing::debug!("access token refreshed");
        Ok(response.access_token)
    }

    async fn dispatch(
        &self,
        builder: RequestBuilder,
        access_token: Option<String>,
    ) -> Result<Response> {
        let builder = match access_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };
        let response = builder.send().await?;
        tracing::debug!(
            url = %response.url().path(),
            status = response.status().as_u16(),
            "admin api response"
        );
        Ok(response)
    }
}

async fn decode_response<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(AdminError::from_status(status, &body));
    }
    Ok(serde_json::from_str(&body)?)
}

fn normalize_base_url(base_url: &str) -> Result<Url> {
    let mut url = Url::parse(base_url.trim())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(AdminError::Config(format!(
            "unsupported URL scheme for API base: {}",
            url.scheme()
        )));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
