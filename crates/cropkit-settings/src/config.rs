//! Configuration file handling for CropKit
//!
//! A [`Config`] holds the crop engine options plus process-level settings
//! such as the log format. Files are JSON or TOML, chosen by extension, and
//! are validated on both load and save so a bad file never reaches a
//! session.

use std::fs;
use std::path::{Path, PathBuf};

use cropkit_core::CropOptions;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{SettingsError, SettingsResult};

/// Directory under the platform config dir that holds CropKit's files.
const APP_DIR: &str = "cropkit";
const CONFIG_FILE: &str = "config.toml";

/// On-disk configuration format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(SettingsError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Logging preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Emit logs as JSON lines instead of human-readable text
    pub json: bool,
}

/// Complete CropKit configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Crop engine options
    pub crop: CropOptions,
    /// Logging preferences
    pub logging: LoggingSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Load {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::parse(&content, format)?;
        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            info!("No config at {}; using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Parse config text in the given format without validating it.
    pub fn parse(content: &str, format: ConfigFormat) -> SettingsResult<Self> {
        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(content)?,
            ConfigFormat::Toml => toml::from_str(content)?,
        };
        Ok(config)
    }

    /// Save config to file (JSON or TOML), creating parent directories.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = self.render(ConfigFormat::from_path(path)?)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| SettingsError::Save {
                path: path.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, content).map_err(|source| SettingsError::Save {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Serialize to text in the given format.
    pub fn render(&self, format: ConfigFormat) -> SettingsResult<String> {
        let content = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };
        Ok(content)
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        self.crop.validate()?;
        Ok(())
    }
}

/// Default location of the config file: `<config dir>/cropkit/config.toml`.
pub fn default_config_path() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
        .ok_or_else(|| {
            SettingsError::ConfigDirectory("platform config directory is unknown".to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cropkit_core::{ConfigError, GuidelinesMode};

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("a/b.json")).unwrap(),
            ConfigFormat::Json
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("b.toml")).unwrap(),
            ConfigFormat::Toml
        );
        assert!(matches!(
            ConfigFormat::from_path(Path::new("b.yaml")),
            Err(SettingsError::UnsupportedFormat(_))
        ));
        assert!(ConfigFormat::from_path(Path::new("config")).is_err());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = Config::parse(
            "[crop]\nsnap_radius = 12.5\nguidelines = \"on\"\n",
            ConfigFormat::Toml,
        )
        .unwrap();
        assert_eq!(config.crop.snap_radius, 12.5);
        assert_eq!(config.crop.guidelines, GuidelinesMode::On);
        assert_eq!(config.crop.handle_radius, 24.0);
        assert!(!config.logging.json);
    }

    #[test]
    fn test_empty_json_is_default() {
        let config = Config::parse("{}", ConfigFormat::Json).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_validate_rejects_bad_ratio() {
        let mut config = Config::new();
        config.crop.aspect_ratio_y = 0;
        assert!(matches!(
            config.validate(),
            Err(SettingsError::Config(ConfigError::InvalidAspectRatio { x: 1, y: 0 }))
        ));
    }

    #[test]
    fn test_render_toml_has_sections() {
        let text = Config::default().render(ConfigFormat::Toml).unwrap();
        assert!(text.contains("[crop]"));
        assert!(text.contains("[logging]"));
        assert!(text.contains("guidelines = \"on_touch\""));
    }

    #[test]
    fn test_default_config_path_shape() {
        if let Ok(path) = default_config_path() {
            assert!(path.ends_with("cropkit/config.toml"));
        }
    }
}
