/*
[INPUT]:  Access/refresh tokens from login and refresh responses
[OUTPUT]: Thread-safe session state with optional on-disk persistence
[POS]:    Auth layer - token lifecycle management
[UPDATE]: When session file format or storage strategy changes
*/

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::TokenClaims;
use crate::http::Result;

/// Stored credentials for the signed-in operator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub saved_at: DateTime<Utc>,
}

impl Session {
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
            saved_at: Utc::now(),
        }
    }

    /// Email the access token was issued for, if it can be read
    pub fn subject(&self) -> Option<String> {
        TokenClaims::decode(&self.access_token).ok()?.sub
    }

    pub fn access_expires_at(&self) -> Option<DateTime<Utc>> {
        TokenClaims::decode(&self.access_token).ok()?.expires_at()
    }
}

/// JSON file holding the persisted session
#[derive(Debug, Clone)]
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the session; a missing or unreadable file means "signed out"
    pub fn load(&self) -> Option<Session> {
        let content = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&content) {
            Ok(session) => Some(session),
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "ignoring unreadable session file: {err}"
                );
                None
            }
        }
    }

    pub fn save(&self, session: &Session) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(session)?;

        // Atomic write: write to temp file then rename
        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, content)?;
        restrict_permissions(&temp_path)?;
        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }

    pub fn remove(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err),
        }
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o600);
    fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> io::Result<()> {
    Ok(())
}

/// Thread-safe session holder shared by the client and auth manager
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    data: Arc<RwLock<Option<Session>>>,
    file: Option<SessionFile>,
}

impl SessionStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that writes every change through to `file`
    pub fn with_file(file: SessionFile) -> Self {
        Self {
            data: Arc::new(RwLock::new(None)),
            file: Some(file),
        }
    }

    pub fn file(&self) -> Option<&SessionFile> {
        self.file.as_ref()
    }

    /// Load the persisted session into memory. Returns whether one existed.
    pub fn restore(&self) -> bool {
        let loaded = self.file.as_ref().and_then(SessionFile::load);
        let found = loaded.is_some();
        *self.write() = loaded;
        found
    }

    pub fn set_tokens(&self, access_token: String, refresh_token: String) -> Result<()> {
        let session = Session::new(access_token, refresh_token);
        self.persist(&session)?;
        *self.write() = Some(session);
        Ok(())
    }

    /// Swap in a refreshed access token, keeping the refresh token
    pub fn replace_access_token(&self, access_token: String) -> Result<()> {
        let mut guard = self.write();
        let session = match guard.as_ref() {
            Some(current) => Session::new(access_token, current.refresh_token.clone()),
            None => Session::new(access_token, String::new()),
        };
        self.persist(&session)?;
        *guard = Some(session);
        Ok(())
    }

    pub fn access_token(&self) -> Option<String> {
        self.read()
            .as_ref()
            .map(|session| session.access_token.clone())
            .filter(|token| !token.is_empty())
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.read()
            .as_ref()
            .map(|session| session.refresh_token.clone())
            .filter(|token| !token.is_empty())
    }

    pub fn session(&self) -> Option<Session> {
        self.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    /// Forget the session in memory and on disk
    pub fn clear(&self) -> Result<()> {
        *self.write() = None;
        if let Some(file) = &self.file {
            file.remove()?;
        }
        Ok(())
    }

    fn persist(&self, session: &Session) -> Result<()> {
        if let Some(file) = &self.file {
            file.save(session)?;
        }
        Ok(())
    }

    fn read(&self) -> RwLockReadGuard<'_, Option<Session>> {
        self.data.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<Session>> {
        self.data.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
