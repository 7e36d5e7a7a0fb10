//! Service configuration loaded from environment variables.
//!
//! Database credentials are required and have no defaults; everything else
//! falls back to a sensible value. A `.env` file is honored via `dotenvy`.

use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

/// Errors raised while loading [`AppConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is not set (or is blank).
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    /// A variable is set but its value cannot be parsed.
    #[error("invalid value for {key}: {value:?}")]
    Invalid {
        /// Variable name.
        key: &'static str,
        /// Raw value that failed to parse.
        value: String,
    },
}

/// Top-level service configuration.
///
/// Loaded once at startup via [`AppConfig::from_env`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:5000`).
    pub listen_addr: SocketAddr,

    /// Connection settings for the feedback database.
    pub database: DatabaseConfig,

    /// Emit log lines as JSON instead of human-readable text.
    pub log_json: bool,
}

/// MySQL connection settings.
#[derive(Clone)]
pub struct DatabaseConfig {
    /// Database host name or address.
    pub host: String,
    /// Database TCP port.
    pub port: u16,
    /// Login user.
    pub user: String,
    /// Login password. Never printed.
    pub password: String,
    /// Schema name.
    pub name: String,
    /// Seconds to wait for a connection before failing the operation.
    pub connect_timeout_secs: u64,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// Calls `dotenvy::dotenv().ok()` first to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] if any of `DB_HOST`, `DB_USER`,
    /// `DB_PASSWORD` or `DB_NAME` is absent, and [`ConfigError::Invalid`]
    /// if an optional variable is set to an unparsable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database = DatabaseConfig {
            host: required(&lookup, "DB_HOST")?,
            port: parse_or(&lookup, "DB_PORT", 3306)?,
            user: required(&lookup, "DB_USER")?,
            password: required(&lookup, "DB_PASSWORD")?,
            name: required(&lookup, "DB_NAME")?,
            connect_timeout_secs: parse_or(&lookup, "DB_CONNECT_TIMEOUT_SECS", 5)?,
        };

        let listen_addr = parse_or(
            &lookup,
            "LISTEN_ADDR",
            SocketAddr::from(([0, 0, 0, 0], 5000)),
        )?;

        let log_json = match lookup("LOG_FORMAT").as_deref() {
            None | Some("text") | Some("TEXT") => false,
            Some("json") | Some("JSON") => true,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "LOG_FORMAT",
                    value: other.to_string(),
                });
            }
        };

        Ok(Self {
            listen_addr,
            database,
            log_json,
        })
    }
}

/// Reads a required variable; blank values count as missing.
fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(key)),
    }
}

/// Parses an optional variable as `T`, returning `default` when unset.
fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    const REQUIRED: [(&str, &str); 4] = [
        ("DB_HOST", "db.internal"),
        ("DB_USER", "admin"),
        ("DB_PASSWORD", "hunter2"),
        ("DB_NAME", "musicdb"),
    ];

    #[test]
    fn defaults_apply_when_only_required_set() {
        let Ok(config) = AppConfig::from_lookup(lookup_from(&REQUIRED)) else {
            panic!("config should load");
        };
        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.port, 3306);
        assert_eq!(config.database.connect_timeout_secs, 5);
        assert_eq!(config.listen_addr, SocketAddr::from(([0, 0, 0, 0], 5000)));
        assert!(!config.log_json);
    }

    #[test]
    fn each_required_variable_is_enforced() {
        for (missing, _) in REQUIRED {
            let pairs: Vec<(&str, &str)> = REQUIRED
                .iter()
                .copied()
                .filter(|(k, _)| *k != missing)
                .collect();
            match AppConfig::from_lookup(lookup_from(&pairs)) {
                Err(ConfigError::Missing(key)) => assert_eq!(key, missing),
                other => panic!("expected Missing({missing}), got {other:?}"),
            }
        }
    }

    #[test]
    fn blank_required_variable_counts_as_missing() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("DB_HOST", "   "));
        let pairs: Vec<(&str, &str)> = pairs.into_iter().skip(1).collect();
        assert!(matches!(
            AppConfig::from_lookup(lookup_from(&pairs)),
            Err(ConfigError::Missing("DB_HOST"))
        ));
    }

    #[test]
    fn overrides_are_parsed() {
        let mut pairs = REQUIRED.to_vec();
        pairs.extend([
            ("DB_PORT", "3307"),
            ("DB_CONNECT_TIMEOUT_SECS", "2"),
            ("LISTEN_ADDR", "127.0.0.1:8080"),
            ("LOG_FORMAT", "json"),
        ]);
        let Ok(config) = AppConfig::from_lookup(lookup_from(&pairs)) else {
            panic!("config should load");
        };
        assert_eq!(config.database.port, 3307);
        assert_eq!(config.database.connect_timeout_secs, 2);
        assert_eq!(config.listen_addr.port(), 8080);
        assert!(config.log_json);
    }

    #[test]
    fn invalid_port_is_rejected() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("DB_PORT", "not-a-port"));
        assert!(matches!(
            AppConfig::from_lookup(lookup_from(&pairs)),
            Err(ConfigError::Invalid { key: "DB_PORT", .. })
        ));
    }

    #[test]
    fn debug_output_redacts_password() {
        let Ok(config) = AppConfig::from_lookup(lookup_from(&REQUIRED)) else {
            panic!("config should load");
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}
