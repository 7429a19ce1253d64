//! User configuration
//!
//! Read from `$PRODUCT_FILTER_CONFIG` or `<config dir>/product-filter/config.json`.
//! A missing file means defaults; a malformed one is an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{Error, Result};

/// Overrides the config file location.
pub const CONFIG_ENV: &str = "PRODUCT_FILTER_CONFIG";

/// Overrides the catalog file (the `--catalog` flag wins over it).
pub const CATALOG_ENV: &str = "PRODUCT_FILTER_CATALOG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON catalog to load instead of the built-in sample data.
    pub catalog: Option<PathBuf>,
    pub window: WindowConfig,
    pub theme: ThemeChoice,
    /// Download `http(s)` product images; off shows initials only.
    pub remote_images: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            window: WindowConfig::default(),
            theme: ThemeChoice::default(),
            remote_images: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 640.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

impl Config {
    /// Default config file path
    pub fn default_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("product-filter").join("config.json"))
    }

    /// Load from the default location, falling back to defaults.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config at {:?}, using defaults", path);
                return Ok(Self::default());
            }
            Err(e) => return Err(Error::io(path, e)),
        };

        serde_json::from_str(&json).map_err(|e| Error::parse(path.display().to_string(), e))
    }

    /// Pick the catalog source: flag, then environment, then config, then built-in.
    pub fn resolve_catalog_path(&self, flag: Option<&Path>) -> Option<PathBuf> {
        flag.map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CATALOG_ENV).map(PathBuf::from))
            .or_else(|| self.catalog.clone())
    }

    pub fn load_catalog(&self, flag: Option<&Path>) -> Result<Catalog> {
        match self.resolve_catalog_path(flag) {
            Some(path) => Catalog::load(&path),
            None => {
                let catalog = Catalog::builtin()?;
                tracing::info!("Using built-in catalog ({} products)", catalog.len());
                Ok(catalog)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("product-filter-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = Config::load_from(&temp_path("does-not-exist.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.theme, ThemeChoice::Dark);
        assert!(config.remote_images);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let path = temp_path("partial.json");
        std::fs::write(
            &path,
            r#"{"theme": "light", "window": {"width": 500}, "remote_images": false}"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.theme, ThemeChoice::Light);
        assert_eq!(config.window.width, 500.0);
        assert_eq!(config.window.height, 640.0);
        assert!(config.catalog.is_none());
        assert!(!config.remote_images);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let path = temp_path("malformed.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = Config::load_from(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(Error::Parse { .. })));
    }

    #[test]
    fn test_flag_overrides_config() {
        let config = Config {
            catalog: Some(PathBuf::from("/from/config.json")),
            ..Config::default()
        };
        let resolved = config.resolve_catalog_path(Some(Path::new("/from/flag.json")));
        assert_eq!(resolved, Some(PathBuf::from("/from/flag.json")));
    }
}
