//! Explicit session context replacing the browser's local storage.
//!
//! Holds the bearer token and the cached user record, loaded once on
//! startup and cleared on logout or authentication failure.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config;
use crate::core::errors::{ClientError, Result};
use crate::core::helpers::now_iso;
use crate::models::models::UserRecord;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Session {
    pub token: String,
    pub user: UserRecord,
    pub saved_at: String,
}

pub struct SessionStore {
    path: PathBuf,
    current: Option<Session>,
}

impl SessionStore {
    /// Load the session file if it exists; a corrupt or unreadable file is
    /// treated as no session.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let current = match fs::read(&path) {
            Ok(bytes) => match serde_json::from_slice::<Session>(&bytes) {
                Ok(session) => Some(session),
                Err(err) => {
                    warn!(path = %path.display(), %err, "discarding unreadable session file");
                    None
                }
            },
            Err(_) => None,
        };
        Self { path, current }
    }

    pub fn open_default() -> Self {
        Self::load(config::session_file_path())
    }

    /// Persist a fresh session after a successful login. The user record is
    /// stored with its role already normalized.
    pub fn establish(&mut self, token: String, mut user: UserRecord) -> Result<()> {
        user.normalize_role();
        let session = Session {
            token,
            user,
            saved_at: now_iso(),
        };
        fs::write(&self.path, serde_json::to_vec(&session).map_err(std::io::Error::from)?)?;
        self.current = Some(session);
        Ok(())
    }

    /// Drop the in-memory session and delete the file.
    pub fn clear(&mut self) -> Result<()> {
        self.current = None;
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.token.as_str())
    }

    pub fn user(&self) -> Option<&UserRecord> {
        self.current.as_ref().map(|s| &s.user)
    }

    /// Token for an authenticated request, failing locally when absent.
    pub fn bearer(&self) -> Result<&str> {
        self.token().ok_or(ClientError::MissingSession)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::models::UserRecord;

    fn user(role: Option<&str>) -> UserRecord {
        UserRecord {
            id: 7,
            name: "Dana".to_string(),
            email: None,
            is_admin: true,
            owns_society: false,
            role: role.map(String::from),
        }
    }

    #[test]
    fn establish_load_clear_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut store = SessionStore::load(&path);
        assert!(!store.is_authenticated());
        assert!(matches!(store.bearer(), Err(ClientError::MissingSession)));

        store.establish("tok-123".to_string(), user(Some("Registrar "))).unwrap();
        assert_eq!(store.bearer().unwrap(), "tok-123");

        let reloaded = SessionStore::load(&path);
        assert_eq!(reloaded.token(), Some("tok-123"));
        assert_eq!(reloaded.user().unwrap().role.as_deref(), Some("registrar"));

        let mut store = reloaded;
        store.clear().unwrap();
        assert!(!store.is_authenticated());
        assert!(!path.exists());
        // clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn corrupt_session_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, b"not json").unwrap();
        let store = SessionStore::load(&path);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn blank_role_normalizes_to_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let mut store = SessionStore::load(&path);
        store.establish("t".to_string(), user(Some("   "))).unwrap();
        assert_eq!(store.user().unwrap().role, None);
    }
}
