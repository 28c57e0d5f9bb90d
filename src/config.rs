//! On-disk configuration for hosts of the engine, stored as TOML under the
//! platform config directory.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::Preset;

const CONFIG_FILE: &str = "tallycart.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to determine project directories")]
    NoProjectDirs,
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the preset sync service. Absent means offline mode.
    #[serde(default)]
    pub sync_endpoint: Option<String>,
    /// Override path for the default catalog definition (TOML `Preset`).
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load from the platform config directory; a missing file yields the
    /// defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no configuration file; using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let project_dirs =
            ProjectDirs::from("dev", "tallycart", "tallycart").ok_or(ConfigError::NoProjectDirs)?;
        Ok(project_dirs.config_dir().join(CONFIG_FILE))
    }
}

/// Read a default-catalog override. The catalog module still decides whether
/// the preset qualifies as the default.
pub fn load_catalog(path: &Path) -> Result<Preset, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = AppConfig::load_from(&dir.path().join("nope.toml")).expect("defaults");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("sub").join(CONFIG_FILE);
        let config = AppConfig {
            sync_endpoint: Some("https://sync.example.com/v1".to_string()),
            catalog_path: Some(PathBuf::from("/tmp/catalog.toml")),
        };
        config.save_to(&path).expect("save");
        let loaded = AppConfig::load_from(&path).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_catalog_parses_preset_toml() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("catalog.toml");
        fs::write(
            &path,
            r#"
id = "builtin:default"
name = "Pantry Staples"
is_default = true

[[categories]]
id = "grains"
name = "Grains"

[[categories.items]]
id = "oats"
name = "Oats"
unit = "kg"
increment_step = 0.5
"#,
        )
        .expect("write");

        let preset = load_catalog(&path).expect("parse");
        assert!(preset.is_default);
        assert_eq!(preset.categories.len(), 1);
        assert_eq!(preset.categories[0].items[0].id, "oats");
    }
}
