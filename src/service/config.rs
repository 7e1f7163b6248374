//! Service Configuration
//!
//! JSON configuration for the OData service: bind address, CORS, the service
//! root the entity set is published under, and an optional data file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::query::ContextUrl;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Characters with meaning in axum route paths
const ROUTE_SYNTAX_CHARS: &[char] = &['*', ':', '{', '}'];

/// Path segment reserved for the `$metadata` route
const METADATA_SEGMENT: &str = "$metadata";

/// OData service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins (empty = any origin)
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Path prefix of the service (default: "/odata/v4")
    #[serde(default = "default_service_root")]
    pub service_root: String,

    /// Schema namespace in `$metadata` (default: "CatalogService")
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Entity type name (default: "Product")
    #[serde(default = "default_entity_type")]
    pub entity_type: String,

    /// Entity set name, also the collection path segment (default: "Products")
    #[serde(default = "default_entity_set")]
    pub entity_set: String,

    /// JSON array of records to serve instead of the sample catalog
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_service_root() -> String {
    "/odata/v4".to_string()
}

fn default_namespace() -> String {
    "CatalogService".to_string()
}

fn default_entity_type() -> String {
    "Product".to_string()
}

fn default_entity_set() -> String {
    "Products".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            service_root: default_service_root(),
            namespace: default_namespace(),
            entity_type: default_entity_type(),
            entity_set: default_entity_set(),
            data_file: None,
        }
    }
}

impl ServiceConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: ServiceConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise use defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            info!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Invalid("port must be > 0".to_string()));
        }

        if !self.service_root.starts_with('/') || self.root().is_empty() {
            return Err(ConfigError::Invalid(format!(
                "service_root must be a non-root absolute path, got '{}'",
                self.service_root
            )));
        }

        for (name, value) in [
            ("namespace", &self.namespace),
            ("entity_type", &self.entity_type),
            ("entity_set", &self.entity_set),
        ] {
            if value.is_empty() || value.contains('/') {
                return Err(ConfigError::Invalid(format!(
                    "{} must be a non-empty name without '/', got '{}'",
                    name, value
                )));
            }
        }

        // Both end up in router paths
        for (name, value) in [
            ("service_root", &self.service_root),
            ("entity_set", &self.entity_set),
        ] {
            if value.contains(ROUTE_SYNTAX_CHARS) {
                return Err(ConfigError::Invalid(format!(
                    "{} must not contain any of {:?}, got '{}'",
                    name, ROUTE_SYNTAX_CHARS, value
                )));
            }
        }

        if self.entity_set == METADATA_SEGMENT {
            return Err(ConfigError::Invalid(format!(
                "entity_set must not be '{}'",
                METADATA_SEGMENT
            )));
        }

        Ok(())
    }

    /// Service root without a trailing slash
    pub fn root(&self) -> &str {
        self.service_root.trim_end_matches('/')
    }

    /// Context URL builder for the configured entity set
    pub fn context_url(&self) -> ContextUrl {
        ContextUrl::new(self.root(), self.entity_set.as_str())
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ServiceConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.root(), "/odata/v4");
        assert_eq!(config.entity_set, "Products");
        assert!(config.cors_origins.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_socket_addr() {
        let config = ServiceConfig::with_port(8080);
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ServiceConfig =
            serde_json::from_str(r#"{"port": 4004, "service_root": "/catalog/"}"#).unwrap();

        assert_eq!(config.port, 4004);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.root(), "/catalog");
        assert_eq!(
            config.context_url().collection(),
            "/catalog/$metadata#Products"
        );
    }

    #[test]
    fn test_validation_failures() {
        let config = ServiceConfig::with_port(0);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = ServiceConfig {
            service_root: "odata".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ServiceConfig {
            service_root: "/".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ServiceConfig {
            entity_set: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        for entity_set in ["Prod*ucts", ":id", "{Products}", "$metadata"] {
            let config = ServiceConfig {
                entity_set: entity_set.to_string(),
                ..Default::default()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::Invalid(_))),
                "entity_set '{}' should be rejected",
                entity_set
            );
        }

        for service_root in ["/odata/*rest", "/odata/:version", "/odata/{v4}"] {
            let config = ServiceConfig {
                service_root: service_root.to_string(),
                ..Default::default()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::Invalid(_))),
                "service_root '{}' should be rejected",
                service_root
            );
        }
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"port": 5000, "data_file": "/tmp/products.json"}}"#).unwrap();

        let config = ServiceConfig::load(file.path()).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.data_file, Some(PathBuf::from("/tmp/products.json")));
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"port": 0}}"#).unwrap();
        assert!(matches!(
            ServiceConfig::load(file.path()),
            Err(ConfigError::Invalid(_))
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            ServiceConfig::load(file.path()),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = ServiceConfig::load_or_default(Path::new("/nonexistent/odata.json")).unwrap();
        assert_eq!(config, ServiceConfig::default());
    }
}
