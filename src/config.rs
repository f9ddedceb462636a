//! Host listener configuration.
//!
//! `HOST` and `PORT` come from the process environment, optionally seeded
//! from a `.env` file by `main`. The backend base URL is not configured here;
//! the browser bundle bakes it in at build time.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid HOST {value:?}: expected an IP address")]
    InvalidHost { value: String },
    #[error("invalid PORT {value:?}: expected 0-65535")]
    InvalidPort { value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostConfig {
    pub addr: SocketAddr,
}

impl HostConfig {
    /// Read `HOST` / `PORT` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when either variable is set but unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when either value is present but unparsable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let host = match read("HOST") {
            Some(value) => value.parse::<IpAddr>().map_err(|_| ConfigError::InvalidHost { value })?,
            None => DEFAULT_HOST,
        };
        let port = match read("PORT") {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidPort { value })?,
            None => DEFAULT_PORT,
        };
        Ok(Self { addr: SocketAddr::new(host, port) })
    }
}
