//! Server settings from environment variables.

use crate::error::ConfigError;
use std::net::SocketAddr;

pub const BIND_ADDR_VAR: &str = "HBNB_BIND_ADDR";
pub const BODY_LIMIT_VAR: &str = "HBNB_BODY_LIMIT";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_BODY_LIMIT: usize = 64 * 1024;

#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Maximum accepted request body, in bytes.
    pub body_limit: usize,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = raw_addr.trim().parse().map_err(|_| ConfigError::Invalid {
            key: BIND_ADDR_VAR,
            value: raw_addr.clone(),
        })?;
        let body_limit = match lookup(BODY_LIMIT_VAR) {
            Some(raw) => raw
                .trim()
                .parse()
                .ok()
                .filter(|n: &usize| *n > 0)
                .ok_or(ConfigError::Invalid {
                    key: BODY_LIMIT_VAR,
                    value: raw,
                })?,
            None => DEFAULT_BODY_LIMIT,
        };
        Ok(ServerConfig {
            bind_addr,
            body_limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:5000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.body_limit, 64 * 1024);
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            (BIND_ADDR_VAR, "127.0.0.1:8080"),
            (BODY_LIMIT_VAR, "1024"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.body_limit, 1024);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(ServerConfig::from_lookup(lookup(&[(BIND_ADDR_VAR, "localhost")])).is_err());
        assert!(ServerConfig::from_lookup(lookup(&[(BODY_LIMIT_VAR, "0")])).is_err());
        assert!(ServerConfig::from_lookup(lookup(&[(BODY_LIMIT_VAR, "lots")])).is_err());
    }
}
