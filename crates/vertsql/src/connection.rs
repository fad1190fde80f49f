//! Named connection registry.
//!
//! Credentials for Vertica connections live in a user-level toml file, one
//! `[connections.<name>]` table per named connection, plus an optional
//! top-level `auto` key naming the default connection:
//!
//! ```toml
//! auto = "prod"
//!
//! [connections.prod]
//! host = "vertica.internal"
//! port = 5433
//! user = "dbadmin"
//! database = "reports"
//! ```
//!
//! The file lives at `$HOME/.vertsql/connections.toml`, overridable with the
//! `VERTSQL_CONNECTION` environment variable (a full path).
//!
//! ```no_run
//! use vertsql::connection::{ConnectionInfo, ConnectionRegistry};
//!
//! let registry = ConnectionRegistry::open()?;
//! registry.new_connection("prod", &ConnectionInfo::new("dbadmin", "reports"), true, true)?;
//! let info = registry.read_connection("prod")?;
//! # Ok::<(), vertsql::SqlError>(())
//! ```

mod config;

pub use config::ConnectionInfo;

use crate::error::{SqlError, SqlResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the connection file location.
pub const CONNECTION_FILE_ENV: &str = "VERTSQL_CONNECTION";

/// Location of the default connection file.
///
/// Honors [`CONNECTION_FILE_ENV`] as a full-path override, otherwise
/// `$HOME/.vertsql/connections.toml`. The file (and its directory) is only
/// created once a connection is stored.
pub fn connection_file() -> SqlResult<PathBuf> {
    if let Ok(path) = env::var(CONNECTION_FILE_ENV) {
        return Ok(PathBuf::from(path));
    }
    let home = env::var("HOME").map_err(|_| {
        SqlError::Config(format!(
            "HOME is not set and {CONNECTION_FILE_ENV} was not provided"
        ))
    })?;
    Ok(Path::new(&home).join(".vertsql").join("connections.toml"))
}

/// On-disk shape of the connection file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConnectionFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    auto: Option<String>,
    #[serde(default)]
    connections: BTreeMap<String, ConnectionInfo>,
}

impl ConnectionFile {
    /// A missing file reads as an empty registry.
    fn load(path: &Path) -> SqlResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    fn save(&self, path: &Path) -> SqlResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let raw = toml::to_string_pretty(self)?;
        fs::write(path, raw)?;
        tracing::debug!(path = %path.display(), "connection file written");
        Ok(())
    }
}

/// Handle to a connection file.
#[derive(Debug, Clone)]
pub struct ConnectionRegistry {
    path: PathBuf,
}

impl ConnectionRegistry {
    /// Open the default registry (environment override or home directory).
    pub fn open() -> SqlResult<Self> {
        Ok(Self {
            path: connection_file()?,
        })
    }

    /// Open a registry backed by an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Names of all stored connections, sorted.
    pub fn available_connections(&self) -> SqlResult<Vec<String>> {
        let file = ConnectionFile::load(&self.path)?;
        Ok(file.connections.keys().cloned().collect())
    }

    /// Name of the auto connection, if one is set.
    pub fn auto_connection(&self) -> SqlResult<Option<String>> {
        let file = ConnectionFile::load(&self.path)?;
        Ok(file.auto)
    }

    /// Read and resolve a named connection.
    ///
    /// Connections stored with `env = true` have their `user`/`password`
    /// resolved from the environment here; an unset variable is an error.
    pub fn read_connection(&self, name: &str) -> SqlResult<ConnectionInfo> {
        let file = ConnectionFile::load(&self.path)?;
        let info = file
            .connections
            .get(name)
            .cloned()
            .ok_or_else(|| SqlError::UnknownConnection(name.to_string()))?;
        info.resolve_env()
    }

    /// Store a connection under `name`.
    ///
    /// Refuses to replace an existing section unless `overwrite` is set.
    /// When `auto` is set, the new section becomes the auto connection.
    pub fn new_connection(
        &self,
        name: &str,
        info: &ConnectionInfo,
        auto: bool,
        overwrite: bool,
    ) -> SqlResult<()> {
        let mut file = ConnectionFile::load(&self.path)?;
        if file.connections.contains_key(name) && !overwrite {
            return Err(SqlError::ConnectionExists(name.to_string()));
        }
        file.connections.insert(name.to_string(), info.clone());
        if auto {
            file.auto = Some(name.to_string());
        }
        file.save(&self.path)
    }

    /// Point the auto connection at an existing section.
    pub fn change_auto_connection(&self, name: &str) -> SqlResult<()> {
        let mut file = ConnectionFile::load(&self.path)?;
        if !file.connections.contains_key(name) {
            return Err(SqlError::UnknownConnection(name.to_string()));
        }
        file.auto = Some(name.to_string());
        file.save(&self.path)
    }

    /// Delete a named connection, returning whether anything was removed.
    ///
    /// Clears the auto pointer when it referenced the deleted section. An
    /// unknown name logs a warning and returns `false`.
    pub fn delete_connection(&self, name: &str) -> SqlResult<bool> {
        let mut file = ConnectionFile::load(&self.path)?;
        if file.connections.remove(name).is_none() {
            tracing::warn!(name = %name, "connection does not exist");
            return Ok(false);
        }
        if file.auto.as_deref() == Some(name) {
            file.auto = None;
        }
        file.save(&self.path)?;
        Ok(true)
    }
}
