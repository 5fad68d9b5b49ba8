//! Host server configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `HOST` | `0.0.0.0` | Interface to bind |
//! | `PORT` | `3000` | TCP port to bind |
//!
//! Log filtering is read separately from `RUST_LOG` by the subscriber.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::env::VarError;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {reason}")]
    InvalidPort { value: String, reason: String },
    #[error("invalid HOST {value:?}: {reason}")]
    InvalidHost { value: String, reason: String },
    #[error("{key} is not valid UTF-8: {value:?}")]
    NotUnicode { key: &'static str, value: String },
}

/// Where the host server listens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Read the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `HOST` or `PORT` is set but unparseable or not
    /// valid UTF-8.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env_value("HOST", std::env::var("HOST"))?;
        let port = env_value("PORT", std::env::var("PORT"))?;
        Self::from_lookup(|key| match key {
            "HOST" => host.clone(),
            "PORT" => port.clone(),
            _ => None,
        })
    }

    /// Read the configuration through `lookup`, which maps a variable name
    /// to its value. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if `HOST` or `PORT` is set but unparseable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = match get("HOST") {
            Some(value) => value.trim().parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::InvalidHost {
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => DEFAULT_HOST,
        };

        let port = match get("PORT") {
            Some(value) => value.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidPort {
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    #[must_use]
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Interpret one `std::env::var` result. Only an absent variable is unset.
fn env_value(
    key: &'static str,
    var: Result<String, VarError>,
) -> Result<Option<String>, ConfigError> {
    match var {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(ConfigError::NotUnicode {
            key,
            value: raw.to_string_lossy().into_owned(),
        }),
    }
}
