#![forbid(unsafe_code)]

//! Appearance configuration loaded at startup.
//!
//! ```toml
//! # folio.toml
//! default_preset = "Mint"
//! default_mode = "dark"
//!
//! [cursor.ring]
//! stiffness = 120.0
//! damping = 18.0
//!
//! [logging]
//! json = true
//! ```
//!
//! Every field has a default matching the stock site, so
//! `AppearanceConfig::default()` behaves exactly like an unconfigured host.

use std::ops::RangeInclusive;
use std::path::Path;

use folio_core::TrackerConfig;
use folio_style::{PalettePreset, PresetId, ThemeMode, catalog};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logging::LoggingConfig;

/// Storage key of the persisted palette record.
pub const DEFAULT_STORAGE_KEY: &str = "portfolio-accent-colors";

/// Storage key of the persisted mode scalar.
pub const DEFAULT_MODE_STORAGE_KEY: &str = "theme";

/// Brightness slider bounds, in percent.
pub const DEFAULT_BRIGHTNESS_MIN: i32 = -30;
pub const DEFAULT_BRIGHTNESS_MAX: i32 = 30;

/// Widest brightness range a config may request.
const BRIGHTNESS_LIMIT: i32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    pub storage_key: String,
    pub mode_storage_key: String,
    /// Catalog name of the preset used when nothing is persisted.
    pub default_preset: String,
    /// Mode used when nothing is persisted and the host reports no system
    /// preference.
    pub default_mode: ThemeMode,
    /// Consult the host's color-scheme preference before `default_mode`.
    pub follow_system: bool,
    pub brightness_min: i32,
    pub brightness_max: i32,
    pub cursor: TrackerConfig,
    pub logging: LoggingConfig,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            mode_storage_key: DEFAULT_MODE_STORAGE_KEY.to_owned(),
            default_preset: PresetId::DEFAULT.name().to_owned(),
            default_mode: ThemeMode::Light,
            follow_system: true,
            brightness_min: DEFAULT_BRIGHTNESS_MIN,
            brightness_max: DEFAULT_BRIGHTNESS_MAX,
            cursor: TrackerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppearanceConfig {
    /// Parse and validate TOML.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str::<Self>(s)?.validated()
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate JSON.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str::<Self>(s)?.validated()
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Check every field. An empty list means the config is usable.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.storage_key.trim().is_empty() {
            errors.push("storage_key must not be empty".into());
        }
        if self.mode_storage_key.trim().is_empty() {
            errors.push("mode_storage_key must not be empty".into());
        }
        if !self.storage_key.is_empty() && self.storage_key == self.mode_storage_key {
            errors.push(format!(
                "storage_key and mode_storage_key must differ, both are {:?}",
                self.storage_key
            ));
        }

        if catalog::find(&self.default_preset).is_none() {
            errors.push(format!(
                "default_preset {:?} is not a built-in preset",
                self.default_preset
            ));
        }

        if self.brightness_min > 0 || self.brightness_min < -BRIGHTNESS_LIMIT {
            errors.push(format!(
                "brightness_min must be in [-{BRIGHTNESS_LIMIT}, 0], got {}",
                self.brightness_min
            ));
        }
        if self.brightness_max < 0 || self.brightness_max > BRIGHTNESS_LIMIT {
            errors.push(format!(
                "brightness_max must be in [0, {BRIGHTNESS_LIMIT}], got {}",
                self.brightness_max
            ));
        }

        for (name, params) in [("dot", self.cursor.dot), ("ring", self.cursor.ring)] {
            if !(params.stiffness.is_finite() && params.stiffness > 0.0) {
                errors.push(format!(
                    "cursor.{name}.stiffness must be > 0, got {}",
                    params.stiffness
                ));
            }
            if !(params.damping.is_finite() && params.damping >= 0.0) {
                errors.push(format!(
                    "cursor.{name}.damping must be >= 0, got {}",
                    params.damping
                ));
            }
        }

        errors.extend(self.logging.validate());
        errors
    }

    fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// The configured default preset, or the catalog default if the name is
    /// unknown.
    #[must_use]
    pub fn default_preset(&self) -> &'static PalettePreset {
        catalog::find(&self.default_preset).unwrap_or_else(catalog::default_preset)
    }

    #[must_use]
    pub fn brightness_range(&self) -> RangeInclusive<i32> {
        self.brightness_min..=self.brightness_max
    }

    /// Mode to start in when nothing is persisted.
    #[must_use]
    pub fn initial_mode(&self, system_preference: Option<ThemeMode>) -> ThemeMode {
        if self.follow_system {
            system_preference.unwrap_or(self.default_mode)
        } else {
            self.default_mode
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::SpringParams;

    #[test]
    fn defaults_match_stock_site() {
        let config = AppearanceConfig::default();
        assert_eq!(config.storage_key, "portfolio-accent-colors");
        assert_eq!(config.mode_storage_key, "theme");
        assert_eq!(config.default_preset().name, "Dusty Rose");
        assert_eq!(config.default_mode, ThemeMode::Light);
        assert_eq!(config.brightness_range(), -30..=30);
        assert_eq!(config.cursor.dot, SpringParams::DOT);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = AppearanceConfig::from_toml_str(
            r#"
            default_preset = "Mint"
            default_mode = "dark"

            [cursor.ring]
            stiffness = 120.0
            damping = 18.0
            "#,
        )
        .unwrap();
        assert_eq!(config.default_preset().name, "Mint");
        assert_eq!(config.default_mode, ThemeMode::Dark);
        assert_eq!(config.cursor.ring, SpringParams::new(120.0, 18.0));
        assert_eq!(config.cursor.dot, SpringParams::DOT);
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn json_round_trip() {
        let config = AppearanceConfig {
            brightness_min: -20,
            ..AppearanceConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(AppearanceConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn validation_collects_every_problem() {
        let config = AppearanceConfig {
            storage_key: String::new(),
            default_preset: "Neon".into(),
            brightness_min: 5,
            brightness_max: 500,
            cursor: TrackerConfig {
                dot: SpringParams::new(0.0, -1.0),
                ..TrackerConfig::default()
            },
            ..AppearanceConfig::default()
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 6, "{errors:?}");
        assert!(errors.iter().any(|e| e.contains("Neon")));
    }

    #[test]
    fn loaders_reject_invalid_config() {
        let err = AppearanceConfig::from_toml_str("default_preset = \"Neon\"").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref errors) if errors.len() == 1));
        assert!(err.to_string().contains("Neon"));
    }

    #[test]
    fn malformed_input_reports_parse_errors() {
        assert!(matches!(
            AppearanceConfig::from_toml_str("default_mode = ["),
            Err(ConfigError::Toml(_))
        ));
        assert!(matches!(
            AppearanceConfig::from_json_str("{\"default_mode\": \"sepia\"}"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn shared_keys_are_rejected() {
        let config = AppearanceConfig {
            mode_storage_key: DEFAULT_STORAGE_KEY.into(),
            ..AppearanceConfig::default()
        };
        assert_eq!(config.validate().len(), 1);
    }

    #[test]
    fn file_loaders() {
        let dir = tempfile::tempdir().unwrap();
        let toml_path = dir.path().join("folio.toml");
        std::fs::write(&toml_path, "follow_system = false\n").unwrap();
        let config = AppearanceConfig::from_toml_file(&toml_path).unwrap();
        assert!(!config.follow_system);
        assert_eq!(config.initial_mode(Some(ThemeMode::Dark)), ThemeMode::Light);

        let missing = dir.path().join("missing.json");
        assert!(matches!(
            AppearanceConfig::from_json_file(&missing),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn initial_mode_prefers_system() {
        let config = AppearanceConfig::default();
        assert_eq!(config.initial_mode(Some(ThemeMode::Dark)), ThemeMode::Dark);
        assert_eq!(config.initial_mode(None), ThemeMode::Light);
    }
}
