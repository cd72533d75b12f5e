/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for cmg-admin-adapter tests

#![allow(dead_code)]

use std::path::PathBuf;

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use cmg_admin_adapter::{AdminClient, ClientConfig, SessionFile, SessionStore};
use uuid::Uuid;
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Unsigned JWT carrying `sub` and `exp`
pub fn test_jwt(sub: &str, exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(
        serde_json::json!({"sub": sub, "exp": exp})
            .to_string()
            .as_bytes(),
    );
    format!("{header}.{payload}.signature")
}

/// Client pointed at the mock server with an in-memory session
pub fn client_for(server: &MockServer) -> AdminClient {
    AdminClient::with_config(ClientConfig::with_base_url(server.uri())).unwrap()
}

/// Client that is already signed in with the given tokens
pub fn signed_in_client(server: &MockServer, access: &str, refresh: &str) -> AdminClient {
    let client = client_for(server);
    client
        .session()
        .set_tokens(access.to_string(), refresh.to_string())
        .unwrap();
    client
}

/// Unique session file path under the system temp dir
pub fn temp_session_path() -> PathBuf {
    std::env::temp_dir()
        .join(format!("cmg-admin-it-{}", Uuid::new_v4()))
        .join("session.json")
}

pub fn file_backed_client(server: &MockServer, path: &PathBuf) -> AdminClient {
    let store = SessionStore::with_file(SessionFile::new(path));
    AdminClient::with_session(ClientConfig::with_base_url(server.uri()), store).unwrap()
}

pub fn category_json(id: Uuid, label: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "label": label,
        "value_definition": "gross_revenue",
        "description": "Gross revenue",
        "type": "custom_formula",
        "priority": 3
    })
}
