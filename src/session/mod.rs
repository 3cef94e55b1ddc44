//! The persisted session: a login flag and a role
//!
//! Exactly two keys survive across reloads, stored through a thin
//! [`SessionBackend`] abstraction. Storage failures degrade to absent
//! values with a warning — a missing or broken store behaves like a
//! logged-out session, it never takes the application down. Nothing else
//! (filter, sort, or page state) is ever persisted.

use crate::core::error::SessionError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::{Arc, RwLock};

/// Storage key for the boolean-as-string login flag
pub const LOGGED_IN_KEY: &str = "isLoggedIn";

/// Storage key for the role string
pub const USER_ROLE_KEY: &str = "userRole";

/// A user's role on the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Instructor,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Student => "student",
            Role::Instructor => "instructor",
            Role::Admin => "admin",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for Role {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "instructor" => Ok(Role::Instructor),
            "admin" => Ok(Role::Admin),
            other => Err(SessionError::InvalidRole {
                value: other.to_string(),
            }),
        }
    }
}

/// Key-value storage behind the session.
///
/// Mirrors the environment-provided storage wrapper this replaces: reads
/// that fail yield `None`, writes that fail yield `false`, and the
/// implementation logs the cause instead of propagating it.
pub trait SessionBackend: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> bool;
    fn remove(&self, key: &str) -> bool;
}

/// In-memory backend for tests and ephemeral sessions
#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        match self.values.write() {
            Ok(mut values) => {
                values.insert(key.to_string(), value.to_string());
                true
            }
            Err(_) => false,
        }
    }

    fn remove(&self, key: &str) -> bool {
        match self.values.write() {
            Ok(mut values) => {
                values.remove(key);
                true
            }
            Err(_) => false,
        }
    }
}

/// File-backed backend: one small JSON object on disk.
///
/// Every operation re-reads and rewrites the whole file; the store holds
/// two keys, so simplicity wins over cleverness here.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn read_map(&self) -> HashMap<String, String> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return HashMap::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "session store not readable");
                return HashMap::new();
            }
        };
        match serde_json::from_str(&content) {
            Ok(map) => map,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "session store corrupt, ignoring");
                HashMap::new()
            }
        }
    }

    fn write_map(&self, map: &HashMap<String, String>) -> bool {
        let content = match serde_json::to_string_pretty(map) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(error = %e, "session store not serializable");
                return false;
            }
        };
        match std::fs::write(&self.path, content) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "session store not writable");
                false
            }
        }
    }
}

impl SessionBackend for FileBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.read_map().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        let mut map = self.read_map();
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    fn remove(&self, key: &str) -> bool {
        let mut map = self.read_map();
        map.remove(key);
        self.write_map(&map)
    }
}

/// The persisted session over the two keys
pub struct Session<B: SessionBackend> {
    backend: B,
}

impl<B: SessionBackend> Session<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Whether a login flag is stored; anything but the literal "true"
    /// counts as logged out
    pub fn is_logged_in(&self) -> bool {
        self.backend
            .get(LOGGED_IN_KEY)
            .map(|v| v == "true")
            .unwrap_or(false)
    }

    /// The stored role. Absent or unparsable values default to
    /// [`Role::Student`], the same fallback the shipped client used.
    pub fn role(&self) -> Role {
        match self.backend.get(USER_ROLE_KEY) {
            Some(value) => value.parse().unwrap_or_else(|e: SessionError| {
                tracing::warn!(error = %e, "stored role invalid, defaulting to student");
                Role::Student
            }),
            None => Role::Student,
        }
    }

    /// Persist a login with the given role
    pub fn log_in(&self, role: Role) -> bool {
        let flag = self.backend.set(LOGGED_IN_KEY, "true");
        let stored = self.backend.set(USER_ROLE_KEY, &role.to_string());
        tracing::info!(%role, "session started");
        flag && stored
    }

    /// Remove both keys
    pub fn log_out(&self) -> bool {
        let flag = self.backend.remove(LOGGED_IN_KEY);
        let role = self.backend.remove(USER_ROLE_KEY);
        tracing::info!("session ended");
        flag && role
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in [Role::Student, Role::Instructor, Role::Admin] {
            let parsed: Role = role.to_string().parse().unwrap();
            assert_eq!(parsed, role);
        }
        assert!("superuser".parse::<Role>().is_err());
    }

    #[test]
    fn test_fresh_session_is_logged_out() {
        let session = Session::new(MemoryBackend::new());
        assert!(!session.is_logged_in());
        assert_eq!(session.role(), Role::Student);
    }

    #[test]
    fn test_login_logout_round_trip() {
        let session = Session::new(MemoryBackend::new());

        assert!(session.log_in(Role::Instructor));
        assert!(session.is_logged_in());
        assert_eq!(session.role(), Role::Instructor);

        assert!(session.log_out());
        assert!(!session.is_logged_in());
        assert_eq!(session.role(), Role::Student);
    }

    #[test]
    fn test_non_true_flag_counts_as_logged_out() {
        let backend = MemoryBackend::new();
        backend.set(LOGGED_IN_KEY, "yes");
        let session = Session::new(backend);
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_invalid_stored_role_defaults_to_student() {
        let backend = MemoryBackend::new();
        backend.set(USER_ROLE_KEY, "superuser");
        let session = Session::new(backend);
        assert_eq!(session.role(), Role::Student);
    }

    #[test]
    fn test_file_backend_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let session = Session::new(FileBackend::new(&path));
        session.log_in(Role::Admin);

        // A fresh handle over the same file sees the persisted state
        let reloaded = Session::new(FileBackend::new(&path));
        assert!(reloaded.is_logged_in());
        assert_eq!(reloaded.role(), Role::Admin);
    }

    #[test]
    fn test_file_backend_corrupt_store_degrades() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json at all").unwrap();

        let session = Session::new(FileBackend::new(&path));
        assert!(!session.is_logged_in());
        assert_eq!(session.role(), Role::Student);
    }

    #[test]
    fn test_file_backend_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path().join("absent.json"));
        assert_eq!(backend.get(LOGGED_IN_KEY), None);
    }
}
