//! Durable session persistence.
//!
//! The store keeps the serialized [`Session`] under a single file in the
//! application data directory, the equivalent of one namespaced key in a
//! browser's local storage. This is the only I/O boundary in the system
//! with a real failure mode: a missing record means "no session", a
//! record that fails to deserialize is treated as corruption and purged
//! (with a warn-level log as the observable side channel), and only
//! genuine I/O failures propagate to the caller.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::auth::session::Session;

/// File name of the persisted session record.
pub const STORE_FILE: &str = "auth.json";

/// Error type for session store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying filesystem failure.
    #[error("session store I/O error: {0}")]
    Io(#[from] io::Error),

    /// The record could not be serialized for writing.
    #[error("failed to serialize session: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Handle on the single persisted session record.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store rooted at `dir`; the record lives at `dir/auth.json`.
    #[must_use]
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(STORE_FILE),
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted session, if any.
    ///
    /// A missing file yields `Ok(None)`. A file that fails to parse is
    /// corruption: the offending file is deleted, the event is logged, and
    /// `Ok(None)` is returned rather than propagating the parse failure.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` for filesystem failures other than the
    /// file being absent.
    pub fn load(&self) -> Result<Option<Session>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<Session>(&raw) {
            Ok(session) => {
                log::debug!("Restored session for {}", session.user.email);
                Ok(Some(session))
            }
            Err(e) => {
                log::warn!(
                    "Corrupt session record at {}, purging: {}",
                    self.path.display(),
                    e
                );
                self.clear()?;
                Ok(None)
            }
        }
    }

    /// Persist `session`, replacing any previous record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the directory or file cannot be
    /// written, or `StoreError::Serialize` if encoding fails.
    pub fn save(&self, session: &Session) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(session)?;
        fs::write(&self.path, json)?;
        log::debug!("Persisted session for {}", session.user.email);
        Ok(())
    }

    /// Remove the persisted record. Absence is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` for filesystem failures other than the
    /// file already being gone.
    pub fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::session::{Role, Session};
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path());

        let session = Session::from_registration("Asha Rao", "asha@university.edu", Role::Student);
        store.save(&session).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, session);
    }

    #[test]
    fn test_save_overwrites_previous_record() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path());

        store.save(&Session::from_login("first@b.edu")).unwrap();
        store.save(&Session::from_login("second@b.edu")).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.user.email, "second@b.edu");
    }

    #[test]
    fn test_corrupt_record_purged_and_treated_as_absent() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path());

        std::fs::write(store.path(), "definitely not json").unwrap();

        assert!(store.load().unwrap().is_none());
        // The offending file must be gone afterwards
        assert!(!store.path().exists());
    }

    #[test]
    fn test_parseable_but_tampered_record_accepted() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path());

        // Well-formed JSON with an arbitrary token is accepted as-is
        let raw = r#"{"user":{"name":"x","email":"x@y.z"},"role":"alumni","token":"forged"}"#;
        std::fs::write(store.path(), raw).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.token, "forged");
        assert_eq!(loaded.role, Role::Alumni);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path());

        store.save(&Session::from_login("a@b.edu")).unwrap();
        store.clear().unwrap();
        assert!(!store.path().exists());
        // Clearing an already-empty store succeeds
        store.clear().unwrap();
    }

    #[test]
    fn test_save_creates_missing_directories() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = SessionStore::new(&nested);

        store.save(&Session::from_login("a@b.edu")).unwrap();
        assert!(store.path().exists());
    }
}
