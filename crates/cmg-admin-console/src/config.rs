/*
[INPUT]:  YAML configuration file, environment, CLI overrides
[OUTPUT]: Resolved console configuration
[POS]:    Configuration layer - API location, session and log paths
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use serde::{Deserialize, Serialize};

use cmg_admin_adapter::ClientConfig;
use cmg_admin_adapter::http::DEFAULT_BASE_URL;

use crate::browser::PAGE_SIZE_OPTIONS;

pub const APP_DIR_NAME: &str = "cmg-admin";
pub const API_URL_ENV: &str = "CMG_ADMIN_API_URL";

/// Console configuration loaded from `config.yaml`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Base URL of the admin API
    pub api_url: String,
    /// Where the signed-in session is persisted
    pub session_file: PathBuf,
    /// Directory for the TUI's rolling log files
    pub log_dir: PathBuf,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    /// Rows per page in the successor panel
    pub page_size: u32,
    /// Rows per page in the legacy panel
    pub legacy_page_size: u32,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        let data_dir = app_data_dir();
        Self {
            api_url: DEFAULT_BASE_URL.to_string(),
            session_file: data_dir.join("session.json"),
            log_dir: data_dir.join("logs"),
            timeout_secs: 30,
            connect_timeout_secs: 10,
            page_size: 10,
            legacy_page_size: 100,
        }
    }
}

impl ConsoleConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("parse config {}", path.display()))?;
        Ok(config)
    }

    /// Resolve configuration: file (explicit or default location), then the
    /// `CMG_ADMIN_API_URL` environment variable, then the `--api-url` flag.
    pub fn load(path: Option<&Path>, api_url_flag: Option<&str>) -> Result<Self> {
        Self::load_with_env(path, std::env::var(API_URL_ENV).ok(), api_url_flag)
    }

    pub fn load_with_env(
        path: Option<&Path>,
        env_api_url: Option<String>,
        api_url_flag: Option<&str>,
    ) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path().filter(|path| path.exists()) {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };

        if let Some(url) = env_api_url.filter(|url| !url.trim().is_empty()) {
            config.api_url = url;
        }
        if let Some(url) = api_url_flag {
            config.api_url = url.to_string();
        }

        config.validate()?;
        tracing::debug!(api_url = %config.api_url, "configuration resolved");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(self.api_url.trim())
            .with_context(|| format!("invalid api_url: {}", self.api_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("api_url must use http or https, got {}", url.scheme());
        }
        if !PAGE_SIZE_OPTIONS.contains(&self.page_size) {
            return Err(anyhow!(
                "page_size must be one of {:?}, got {}",
                PAGE_SIZE_OPTIONS,
                self.page_size
            ));
        }
        if self.legacy_page_size == 0 {
            bail!("legacy_page_size must be greater than 0");
        }
        if self.timeout_secs == 0 || self.connect_timeout_secs == 0 {
            bail!("timeouts must be greater than 0");
        }
        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api_url.trim().to_string(),
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join("config.yaml"))
}

fn app_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp_config(content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("cmg-admin-config-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.yaml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = ConsoleConfig::default();
        assert_eq!(config.api_url, "http://localhost:8000");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.legacy_page_size, 100);
        assert!(config.session_file.ends_with("cmg-admin/session.json"));
        config.validate().unwrap();
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let path = write_temp_config("api_url: https://admin.example.com\npage_size: 20\n");
        let config = ConsoleConfig::load_with_env(Some(&path), None, None).unwrap();
        assert_eq!(config.api_url, "https://admin.example.com");
        assert_eq!(config.page_size, 20);
        assert_eq!(config.timeout_secs, 30);
        std::fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_override_order() {
        let path = write_temp_config("api_url: https://file.example.com\n");

        let from_env = ConsoleConfig::load_with_env(
            Some(&path),
            Some("https://env.example.com".to_string()),
            None,
        )
        .unwrap();
        assert_eq!(from_env.api_url, "https://env.example.com");

        let from_flag = ConsoleConfig::load_with_env(
            Some(&path),
            Some("https://env.example.com".to_string()),
            Some("http://flag.example.com:9000"),
        )
        .unwrap();
        assert_eq!(from_flag.api_url, "http://flag.example.com:9000");

        std::fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = ConsoleConfig::default();
        config.page_size = 7;
        assert!(config.validate().is_err());

        let mut config = ConsoleConfig::default();
        config.api_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        let mut config = ConsoleConfig::default();
        config.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let path = std::env::temp_dir().join("cmg-admin-does-not-exist.yaml");
        assert!(ConsoleConfig::load_with_env(Some(&path), None, None).is_err());
    }

    #[test]
    fn test_client_config_carries_timeouts() {
        let mut config = ConsoleConfig::default();
        config.timeout_secs = 5;
        let client = config.client_config();
        assert_eq!(client.timeout, Duration::from_secs(5));
        assert_eq!(client.connect_timeout, Duration::from_secs(10));
    }
}
