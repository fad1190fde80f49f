//! Connection credential records.

use crate::error::{SqlError, SqlResult};
use serde::{Deserialize, Serialize};
use std::env;

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    5433
}

/// Credentials and options for one named connection.
///
/// With `env = true`, `user` and `password` hold environment variable
/// *names* rather than values; they are resolved when the connection is
/// read, so the file itself never stores credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionInfo {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub user: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub database: String,
    #[serde(default)]
    pub ssl: bool,
    /// Connection timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_timeout: Option<u64>,
    /// Treat `user`/`password` as environment variable names.
    #[serde(default)]
    pub env: bool,
}

impl ConnectionInfo {
    /// A connection to `database` on the default local port.
    pub fn new(user: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            user: user.into(),
            password: None,
            database: database.into(),
            ssl: false,
            connection_timeout: None,
            env: false,
        }
    }

    /// Replace `user`/`password` with the values of the environment
    /// variables they name. A no-op when `env` is false.
    pub(crate) fn resolve_env(self) -> SqlResult<Self> {
        if !self.env {
            return Ok(self);
        }
        let mut resolved = self.clone();
        resolved.user = lookup("user", &self.user)?;
        if let Some(var) = &self.password {
            resolved.password = Some(lookup("password", var)?);
        }
        resolved.env = false;
        Ok(resolved)
    }

    /// Render a `vertica://` DSN for display and logging.
    ///
    /// The password is never included.
    pub fn url(&self) -> String {
        format!(
            "vertica://{}@{}:{}/{}",
            self.user, self.host, self.port, self.database
        )
    }
}

fn lookup(option: &str, var: &str) -> SqlResult<String> {
    env::var(var).map_err(|_| SqlError::MissingEnv {
        option: option.to_string(),
        var: var.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_local_defaults() {
        let info = ConnectionInfo::new("dbadmin", "reports");
        assert_eq!(info.host, "localhost");
        assert_eq!(info.port, 5433);
        assert!(!info.ssl);
        assert!(info.password.is_none());
    }

    #[test]
    fn url_omits_password() {
        let mut info = ConnectionInfo::new("dbadmin", "reports");
        info.password = Some("secret".to_string());
        info.host = "vertica.internal".to_string();
        assert_eq!(info.url(), "vertica://dbadmin@vertica.internal:5433/reports");
    }

    #[test]
    fn resolve_env_is_noop_without_flag() {
        let info = ConnectionInfo::new("dbadmin", "reports");
        let resolved = info.clone().resolve_env().unwrap();
        assert_eq!(resolved, info);
    }

    #[test]
    fn resolve_env_reads_named_variables() {
        unsafe {
            env::set_var("VERTSQL_TEST_RESOLVE_USER", "alice");
            env::set_var("VERTSQL_TEST_RESOLVE_PWD", "hunter2");
        }
        let mut info = ConnectionInfo::new("VERTSQL_TEST_RESOLVE_USER", "reports");
        info.password = Some("VERTSQL_TEST_RESOLVE_PWD".to_string());
        info.env = true;

        let resolved = info.resolve_env().unwrap();
        assert_eq!(resolved.user, "alice");
        assert_eq!(resolved.password.as_deref(), Some("hunter2"));
        assert!(!resolved.env);
    }

    #[test]
    fn resolve_env_reports_missing_variable() {
        let mut info = ConnectionInfo::new("VERTSQL_TEST_RESOLVE_MISSING", "reports");
        info.env = true;

        let err = info.resolve_env().unwrap_err();
        assert!(
            err.to_string()
                .contains("VERTSQL_TEST_RESOLVE_MISSING")
        );
    }

    #[test]
    fn toml_round_trip_keeps_defaults_implicit() {
        let info = ConnectionInfo::new("dbadmin", "reports");
        let raw = toml::to_string(&info).unwrap();
        assert!(!raw.contains("password"));
        let back: ConnectionInfo = toml::from_str(&raw).unwrap();
        assert_eq!(back, info);
    }

    #[test]
    fn toml_defaults_apply_on_sparse_input() {
        let info: ConnectionInfo =
            toml::from_str("user = \"dbadmin\"\ndatabase = \"reports\"").unwrap();
        assert_eq!(info.host, "localhost");
        assert_eq!(info.port, 5433);
        assert!(!info.env);
    }
}
