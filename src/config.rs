use std::path::Path;

use log::warn;

use crate::error::ConfigError;
use crate::game::RulesConfig;
use crate::ui::text::DisplayConfig;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub rules: RulesConfig,
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let glyphs = [
            ("display.white", self.display.white),
            ("display.black", self.display.black),
            ("display.empty", self.display.empty),
        ];

        for (name, glyph) in glyphs {
            if glyph.is_whitespace() || glyph.is_control() {
                return Err(ConfigError::Validation(format!(
                    "{name} must be a visible character"
                )));
            }
        }

        let d = &self.display;
        if d.white == d.black || d.white == d.empty || d.black == d.empty {
            return Err(ConfigError::Validation(
                "display glyphs must be distinct".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
