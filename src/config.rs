use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::hardware::{InventorySources, VendorEntry};

const DEFAULT_POST_URL: &str = "http://localhost:6183";

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    sources: InventorySources,
    vendors: Vec<VendorEntry>,
    post_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            sources: InventorySources::default(),
            vendors: Vec::new(),
            post_url: DEFAULT_POST_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Load from `path`, or from the user config directory when no path is
    /// given. Only the default location may be missing.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => match default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(AppConfig::default()),
            },
        }
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let yaml = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&yaml)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn sources(&self) -> &InventorySources {
        &self.sources
    }

    pub fn vendors(&self) -> &[VendorEntry] {
        &self.vendors
    }

    pub fn post_url(&self) -> &str {
        &self.post_url
    }
}

fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bmc-inventory").join("config.yaml"))
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_uses_defaults() -> Result<(), ConfigError> {
        let config = AppConfig::from_yaml("{}")?;

        assert_eq!(config, AppConfig::default());
        assert!(config.sources().components);
        assert!(config.sources().network_interfaces);
        assert_eq!(config.post_url(), "http://localhost:6183");
        Ok(())
    }

    #[test]
    fn reads_sources_and_vendor_entries() -> Result<(), ConfigError> {
        let yaml = r#"
sources:
  network_interfaces: false
vendors:
  - prefix: "ACME-"
    vendor: Acme
post_url: https://fleet.example.net
"#;
        let config = AppConfig::from_yaml(yaml)?;

        assert_eq!(
            *config.sources(),
            InventorySources {
                components: true,
                network_interfaces: false,
            }
        );
        assert_eq!(
            config.vendors(),
            &[VendorEntry {
                prefix: "ACME-".to_string(),
                vendor: "Acme".to_string(),
            }]
        );
        assert_eq!(config.post_url(), "https://fleet.example.net");
        Ok(())
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let result = AppConfig::load(Some(Path::new("/nonexistent/bmc-inventory.yaml")));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn unknown_types_are_rejected() {
        let result = AppConfig::from_yaml("sources: [1, 2]");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
