//! Server configuration read from the process environment.

use std::env;
use std::net::SocketAddr;

/// Listen address used when `BIND_ADDR` is not set.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Errors raised while reading the environment at startup.
///
/// All of these are fatal: the process refuses to start without a valid
/// store connection string and listen address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `DATABASE_URI` is absent or blank.
    #[error("DATABASE_URI must be set to the backing store connection string")]
    MissingDatabaseUri,

    /// `BIND_ADDR` does not parse as a socket address.
    #[error("BIND_ADDR is not a valid socket address: {value}")]
    InvalidBindAddr {
        /// The rejected value.
        value: String,
    },
}

/// Immutable-after-construction server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    database_uri: String,
    bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `DATABASE_URI` is missing or blank, or
    /// when `BIND_ADDR` is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_uri =
            env::var("DATABASE_URI").map_err(|_| ConfigError::MissingDatabaseUri)?;
        if database_uri.trim().is_empty() {
            return Err(ConfigError::MissingDatabaseUri);
        }

        let bind_addr = match env::var("BIND_ADDR") {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr { value })?,
            Err(_) => DEFAULT_BIND_ADDR
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr {
                    value: DEFAULT_BIND_ADDR.to_owned(),
                })?,
        };

        Ok(Self {
            database_uri,
            bind_addr,
        })
    }

    /// Connection string for the backing store.
    pub fn database_uri(&self) -> &str {
        &self.database_uri
    }

    /// Socket address the server will bind to.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use env_lock::lock_env;
    use rstest::rstest;

    #[rstest]
    fn missing_database_uri_is_fatal() {
        let _guard = lock_env([("DATABASE_URI", None::<String>), ("BIND_ADDR", None)]);

        assert_eq!(
            ServerConfig::from_env(),
            Err(ConfigError::MissingDatabaseUri)
        );
    }

    #[rstest]
    fn blank_database_uri_is_fatal() {
        let _guard = lock_env([
            ("DATABASE_URI", Some("   ".to_owned())),
            ("BIND_ADDR", None),
        ]);

        assert_eq!(
            ServerConfig::from_env(),
            Err(ConfigError::MissingDatabaseUri)
        );
    }

    #[rstest]
    fn bind_addr_defaults_when_absent() {
        let _guard = lock_env([
            ("DATABASE_URI", Some("postgres://localhost/users".to_owned())),
            ("BIND_ADDR", None),
        ]);

        let config = ServerConfig::from_env().expect("valid config");

        assert_eq!(config.database_uri(), "postgres://localhost/users");
        assert_eq!(config.bind_addr().to_string(), DEFAULT_BIND_ADDR);
    }

    #[rstest]
    fn bind_addr_override_is_respected() {
        let _guard = lock_env([
            ("DATABASE_URI", Some("postgres://localhost/users".to_owned())),
            ("BIND_ADDR", Some("127.0.0.1:9090".to_owned())),
        ]);

        let config = ServerConfig::from_env().expect("valid config");

        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:9090");
    }

    #[rstest]
    fn unparseable_bind_addr_is_fatal() {
        let _guard = lock_env([
            ("DATABASE_URI", Some("postgres://localhost/users".to_owned())),
            ("BIND_ADDR", Some("not-an-address".to_owned())),
        ]);

        assert_eq!(
            ServerConfig::from_env(),
            Err(ConfigError::InvalidBindAddr {
                value: "not-an-address".to_owned()
            })
        );
    }
}
