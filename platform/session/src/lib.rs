//! Session fields kept between CLI invocations.
//!
//! The store is a flat string map persisted as a JSON object, with no expiry
//! and no refresh. Logging in writes the identity fields; logging out clears
//! every field.

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use entity::{Identity, Role};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no config directory available; set {0}")]
    NoConfigDir(String),
    #[error("failed to access session file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode session: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type SessionResult<T> = Result<T, SessionError>;

/// Keys the portal reads and writes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionKey {
    Id,
    Role,
    UserName,
    EmployeeId,
    ManagerId,
}

impl SessionKey {
    pub const ALL: [SessionKey; 5] = [
        SessionKey::Id,
        SessionKey::Role,
        SessionKey::UserName,
        SessionKey::EmployeeId,
        SessionKey::ManagerId,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SessionKey::Id => "id",
            SessionKey::Role => "role",
            SessionKey::UserName => "userName",
            SessionKey::EmployeeId => "employeeId",
            SessionKey::ManagerId => "managerId",
        }
    }
}

/// Where the session file lives.
#[derive(Clone, Debug, Deserialize)]
pub struct SessionSettings {
    #[serde(default = "default_path_key")]
    env_key: String,
}

fn default_path_key() -> String {
    "HR_SESSION_FILE".to_string()
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            env_key: default_path_key(),
        }
    }
}

impl SessionSettings {
    pub fn new(env_key: impl Into<String>) -> Self {
        Self {
            env_key: env_key.into(),
        }
    }

    /// `$HR_SESSION_FILE`, else `<config dir>/hr-portal/session.json`.
    pub fn path(&self) -> SessionResult<PathBuf> {
        if let Ok(path) = std::env::var(&self.env_key) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
        dirs::config_dir()
            .map(|dir| dir.join("hr-portal").join("session.json"))
            .ok_or_else(|| SessionError::NoConfigDir(self.env_key.clone()))
    }
}

/// Typed view of the stored fields for a logged-in user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub id: i64,
    pub role: Role,
    pub user_name: Option<String>,
    pub employee_id: Option<i64>,
    pub manager_id: Option<i64>,
}

impl Session {
    pub fn display_name(&self) -> &str {
        self.user_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| self.role.title())
    }

    pub fn initial(&self) -> char {
        self.display_name()
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}

#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl SessionStore {
    /// Load the store. A missing file is an empty session; an unreadable
    /// one is discarded with a warning so logging in again recovers.
    pub fn open(path: impl Into<PathBuf>) -> SessionResult<Self> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                warn!(path = %path.display(), error = %err, "ignoring corrupt session file");
                BTreeMap::new()
            }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(SessionError::Io { path, source }),
        };
        Ok(Self { path, values })
    }

    pub fn from_settings(settings: &SessionSettings) -> SessionResult<Self> {
        Self::open(settings.path()?)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: SessionKey) -> Option<&str> {
        self.values.get(key.as_str()).map(String::as_str)
    }

    pub fn set(&mut self, key: SessionKey, value: impl Into<String>) -> SessionResult<()> {
        self.values.insert(key.as_str().to_string(), value.into());
        self.persist()
    }

    pub fn remove(&mut self, key: SessionKey) -> SessionResult<()> {
        if self.values.remove(key.as_str()).is_some() {
            self.persist()?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Logout: drop every field and the file itself.
    pub fn clear(&mut self) -> SessionResult<()> {
        self.values.clear();
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "session cleared");
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(SessionError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Replace whatever was stored with a fresh login.
    pub fn record_login(&mut self, identity: &Identity) -> SessionResult<()> {
        self.values.clear();
        let id = identity.id.to_string();
        self.values.insert(SessionKey::Id.as_str().into(), id.clone());
        self.values
            .insert(SessionKey::Role.as_str().into(), identity.role.as_str().into());
        self.values
            .insert(SessionKey::UserName.as_str().into(), identity.name.clone());
        match identity.role {
            Role::Employee => {
                self.values.insert(SessionKey::EmployeeId.as_str().into(), id);
            }
            Role::Manager => {
                self.values.insert(SessionKey::ManagerId.as_str().into(), id);
            }
            Role::SuperAdmin => {}
        }
        self.persist()
    }

    /// The logged-in user, if `id` and `role` are both present and readable.
    pub fn session(&self) -> Option<Session> {
        let id = self.get(SessionKey::Id)?.parse().ok()?;
        let role = self.get(SessionKey::Role)?.parse().ok()?;
        Some(Session {
            id,
            role,
            user_name: self.get(SessionKey::UserName).map(str::to_string),
            employee_id: self.get(SessionKey::EmployeeId).and_then(|v| v.parse().ok()),
            manager_id: self.get(SessionKey::ManagerId).and_then(|v| v.parse().ok()),
        })
    }

    fn persist(&self) -> SessionResult<()> {
        let io_err = |source| SessionError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let body = serde_json::to_vec_pretty(&self.values)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, body).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)?;
        Ok(())
    }
}
