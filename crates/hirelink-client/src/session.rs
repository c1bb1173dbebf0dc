//! Session state for the authenticated user.
//!
//! One authoritative store holds the signed-in profile together with its
//! bearer token, mirrored to a JSON file on every mutation and rehydrated
//! from it at construction. The store is a handle meant to be injected into
//! [`crate::ApiClient`] and any other code needing identity, not a global.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tracing::warn;

use crate::error::{ClientError, Result};

/// Account role, a closed set assigned by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Recruiter,
    Tenant,
    User,
}

/// Identity fields of the signed-in account, as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// The authenticated identity: profile plus bearer token.
///
/// Token and user travel as one value, so a half-set session cannot exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: UserProfile,
    pub token: String,
}

/// Single source of truth for "who is logged in", surviving restarts.
///
/// Cloning is cheap; clones share state. Mutators persist synchronously,
/// readers never touch storage or the network.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<Session>>>,
    path: Option<PathBuf>,
}

impl SessionStore {
    /// Store persisted under the platform config directory.
    pub fn open_default() -> Self {
        match dirs::config_dir() {
            Some(dir) => Self::open(dir.join("hirelink").join("session.json")),
            None => {
                warn!("No config directory available, session will not persist");
                Self::in_memory()
            }
        }
    }

    /// Store persisted at an explicit path, rehydrating whatever is there.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let session = load_session(&path);
        SessionStore {
            inner: Arc::new(RwLock::new(session)),
            path: Some(path),
        }
    }

    /// Store with no durable backing. Useful in tests and one-shot tools.
    pub fn in_memory() -> Self {
        SessionStore {
            inner: Arc::new(RwLock::new(None)),
            path: None,
        }
    }

    /// Replace any existing session wholesale and persist it.
    pub fn set(&self, user: UserProfile, token: impl Into<String>) -> Result<()> {
        let session = Session {
            user,
            token: token.into(),
        };
        self.write_file(Some(&session))?;
        *self.lock_write() = Some(session);
        Ok(())
    }

    /// Current session, if any.
    pub fn get(&self) -> Option<Session> {
        self.lock_read().clone()
    }

    /// Bearer token of the current session, if any.
    pub fn token(&self) -> Option<String> {
        self.lock_read().as_ref().map(|s| s.token.clone())
    }

    /// Drop the session from memory and durable storage. Idempotent.
    pub fn clear(&self) -> Result<()> {
        self.write_file(None)?;
        *self.lock_write() = None;
        Ok(())
    }

    fn write_file(&self, session: Option<&Session>) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        match session {
            Some(session) => {
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)?;
                }
                let json = serde_json::to_string_pretty(session)?;
                fs::write(path, json)?;
            }
            None => {
                if let Err(e) = fs::remove_file(path) {
                    if e.kind() != std::io::ErrorKind::NotFound {
                        return Err(ClientError::Io(e));
                    }
                }
            }
        }
        Ok(())
    }

    fn lock_read(&self) -> std::sync::RwLockReadGuard<'_, Option<Session>> {
        match self.inner.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn lock_write(&self) -> std::sync::RwLockWriteGuard<'_, Option<Session>> {
        match self.inner.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// Read a persisted session, treating missing or corrupt state as "not
/// signed in".
fn load_session(path: &Path) -> Option<Session> {
    if !path.exists() {
        return None;
    }
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<Session>(&content) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!("Failed to parse session file at {:?}: {}", path, e);
                None
            }
        },
        Err(e) => {
            warn!("Failed to read session file at {:?}: {}", path, e);
            None
        }
    }
}
