//! Session persistence.
//!
//! The store is the injectable seam for session state: two operations,
//! load and save. The file implementation keeps the whole session set in
//! one JSON document; a corrupt document is discarded rather than
//! treated as fatal.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::warn;

use super::models::Session;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("session store io: {0}")]
    Io(#[from] std::io::Error),

    #[error("session store serialization: {0}")]
    Serde(#[from] serde_json::Error),
}

pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Vec<Session>, StoreError>;
    fn save(&self, sessions: &[Session]) -> Result<(), StoreError>;
}

/// JSON-file-backed session store
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Vec<Session>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&self.path)?;
        match serde_json::from_str(&raw) {
            Ok(sessions) => Ok(sessions),
            Err(err) => {
                warn!(
                    "Discarding unparsable session file {}: {}",
                    self.path.display(),
                    err
                );
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, sessions: &[Session]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let raw = serde_json::to_string_pretty(sessions)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral deployments
#[derive(Default)]
pub struct MemorySessionStore {
    sessions: Mutex<Vec<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Vec<Session>, StoreError> {
        Ok(self.sessions.lock().unwrap().clone())
    }

    fn save(&self, sessions: &[Session]) -> Result<(), StoreError> {
        *self.sessions.lock().unwrap() = sessions.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::models::User;
    use chrono::{Duration, Utc};

    fn sample_session(token: &str) -> Session {
        let now = Utc::now();
        Session {
            token: token.to_string(),
            user: User {
                uid: "user-123".to_string(),
                email: "test@example.com".to_string(),
                display_name: "Test User".to_string(),
                email_verified: true,
            },
            created_at: now,
            expires_at: now + Duration::hours(24),
        }
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "parkride-store-{}-{}.json",
            name,
            uuid::Uuid::new_v4().simple()
        ))
    }

    #[test]
    fn test_file_store_roundtrip() {
        let path = temp_path("roundtrip");
        let store = FileSessionStore::new(&path);

        let sessions = vec![sample_session("a"), sample_session("b")];
        store.save(&sessions).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].token, "a");
        assert_eq!(loaded[1].user.email, "test@example.com");

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let store = FileSessionStore::new(temp_path("missing"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_file_store_corrupt_file_is_discarded() {
        let path = temp_path("corrupt");
        fs::write(&path, "{not json").unwrap();

        let store = FileSessionStore::new(&path);
        assert!(store.load().unwrap().is_empty());

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemorySessionStore::new();
        assert!(store.load().unwrap().is_empty());

        store.save(&[sample_session("a")]).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);

        store.save(&[]).unwrap();
        assert!(store.load().unwrap().is_empty());
    }
}
