use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const ADDR_VAR: &str = "BIRTHDAY_HOST_ADDR";
pub const DIST_VAR: &str = "BIRTHDAY_DIST_DIR";

const DEFAULT_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_DIST_DIR: &str = "frontend/dist";

#[derive(Debug, Error)]
pub enum HostError {
    #[error("invalid BIRTHDAY_HOST_ADDR '{value}': {source}")]
    InvalidAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("dist directory {} does not exist; build the frontend with `trunk build` first", .0.display())]
    MissingDist(PathBuf),
    #[error("dist directory {} has no index.html", .0.display())]
    MissingIndex(PathBuf),
}

/// Host settings read from the environment
#[derive(Debug, Clone, PartialEq)]
pub struct HostConfig {
    pub addr: SocketAddr,
    pub dist_dir: PathBuf,
}

impl HostConfig {
    pub fn from_env() -> Result<Self, HostError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, HostError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr_value = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_value
            .parse::<SocketAddr>()
            .map_err(|source| HostError::InvalidAddr {
                value: addr_value.clone(),
                source,
            })?;
        let dist_dir = lookup(DIST_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));

        Ok(Self { addr, dist_dir })
    }

    /// The dist directory must hold a built frontend
    pub fn validate(&self) -> Result<(), HostError> {
        if !self.dist_dir.is_dir() {
            return Err(HostError::MissingDist(self.dist_dir.clone()));
        }
        if !self.dist_dir.join("index.html").is_file() {
            return Err(HostError::MissingIndex(self.dist_dir.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = HostConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.dist_dir, PathBuf::from("frontend/dist"));
    }

    #[test]
    fn test_overrides() {
        let config = HostConfig::from_lookup(lookup_from(&[
            (ADDR_VAR, "0.0.0.0:3000"),
            (DIST_VAR, "/srv/birthday"),
        ]))
        .unwrap();
        assert_eq!(config.addr.port(), 3000);
        assert_eq!(config.dist_dir, PathBuf::from("/srv/birthday"));
    }

    #[test]
    fn test_invalid_addr() {
        let result = HostConfig::from_lookup(lookup_from(&[(ADDR_VAR, "localhost")]));
        assert!(matches!(result, Err(HostError::InvalidAddr { .. })));
    }

    #[test]
    fn test_validate_dist() {
        let dir = tempfile::tempdir().unwrap();
        let config = HostConfig {
            addr: "127.0.0.1:0".parse().unwrap(),
            dist_dir: dir.path().to_path_buf(),
        };
        assert!(matches!(config.validate(), Err(HostError::MissingIndex(_))));

        std::fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        assert!(config.validate().is_ok());

        let missing = HostConfig {
            dist_dir: dir.path().join("nope"),
            ..config
        };
        assert!(matches!(missing.validate(), Err(HostError::MissingDist(_))));
    }
}
