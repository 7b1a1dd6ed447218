//! Runtime configuration, read from the environment (and `.env`).

use std::env;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub const DEFAULT_BIND: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8444;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("FLEET_PORT must be a port number, got {0:?}")]
    InvalidPort(String),
    #[error("FLEET_TLS_CERT and FLEET_TLS_KEY must be set together")]
    PartialTls,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TlsFiles {
    pub cert: PathBuf,
    pub key: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
    /// Output of `trunk build` for the console.
    pub dist_dir: PathBuf,
    /// Plain HTTP when absent.
    pub tls: Option<TlsFiles>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| get(key).filter(|v| !v.trim().is_empty());

        let port = match var("FLEET_PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let tls = match (var("FLEET_TLS_CERT"), var("FLEET_TLS_KEY")) {
            (Some(cert), Some(key)) => Some(TlsFiles { cert: cert.into(), key: key.into() }),
            (None, None) => None,
            _ => return Err(ConfigError::PartialTls),
        };

        Ok(Self {
            bind: var("FLEET_BIND").unwrap_or_else(|| DEFAULT_BIND.into()),
            port,
            dist_dir: var("FLEET_DIST_DIR").map(PathBuf::from).unwrap_or_else(default_dist_dir),
            tls,
        })
    }
}

fn default_dist_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../frontend/dist")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.bind, "0.0.0.0");
        assert_eq!(cfg.port, 8444);
        assert!(cfg.dist_dir.ends_with("../frontend/dist"));
        assert_eq!(cfg.tls, None);
    }

    #[test]
    fn test_overrides() {
        let cfg = ServerConfig::from_lookup(lookup(&[
            ("FLEET_BIND", "127.0.0.1"),
            ("FLEET_PORT", "9000"),
            ("FLEET_DIST_DIR", "/srv/fleet"),
            ("FLEET_TLS_CERT", "certs/cert.pem"),
            ("FLEET_TLS_KEY", "certs/key.pem"),
        ]))
        .unwrap();

        assert_eq!(cfg.bind, "127.0.0.1");
        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.dist_dir, PathBuf::from("/srv/fleet"));
        assert_eq!(
            cfg.tls,
            Some(TlsFiles { cert: "certs/cert.pem".into(), key: "certs/key.pem".into() })
        );
    }

    #[test]
    fn test_bad_port() {
        let err = ServerConfig::from_lookup(lookup(&[("FLEET_PORT", "http")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort("http".into()));
    }

    #[test]
    fn test_half_tls_rejected() {
        let err = ServerConfig::from_lookup(lookup(&[("FLEET_TLS_CERT", "cert.pem")])).unwrap_err();
        assert_eq!(err, ConfigError::PartialTls);
    }

    #[test]
    fn test_blank_values_fall_back() {
        let cfg = ServerConfig::from_lookup(lookup(&[("FLEET_PORT", " "), ("FLEET_BIND", "")])).unwrap();
        assert_eq!(cfg.port, DEFAULT_PORT);
        assert_eq!(cfg.bind, DEFAULT_BIND);
    }
}
