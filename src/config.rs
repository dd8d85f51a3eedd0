use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub browser: BrowserConfig,
    pub tui: TuiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Directory extensions treated as application bundles
    pub bundle_extensions: Vec<String>,
    /// Treat directories containing an executable `AppRun` as applications
    pub detect_app_dirs: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Width of one grid cell in columns
    pub cell_width: u16,
    /// Maximum delay between the two clicks of a double-click (milliseconds)
    pub double_click_ms: u64,
    /// Use colors
    pub color: bool,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            bundle_extensions: vec!["app".to_string(), "bundle".to_string()],
            detect_app_dirs: true,
        }
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            cell_width: 16,
            double_click_ms: 500,
            color: true,
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit `path` must exist and parse. Without one, the per-user file
    /// (`$XDG_CONFIG_HOME/seeker/config.toml`) is read when present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) if p.exists() => p,
                _ => return Ok(Self::default()),
            },
        };

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ParseError {
                path: path.clone(),
                source,
            })?;

        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Location of the per-user configuration file.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("seeker").join("config.toml"))
    }

    fn normalize(&mut self) {
        for ext in &mut self.browser.bundle_extensions {
            *ext = ext.trim().trim_start_matches('.').to_lowercase();
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(8..=64).contains(&self.tui.cell_width) {
            return Err(ConfigError::Invalid(format!(
                "tui.cell_width must be between 8 and 64, got {}",
                self.tui.cell_width
            )));
        }
        if !(1..=5000).contains(&self.tui.double_click_ms) {
            return Err(ConfigError::Invalid(format!(
                "tui.double_click_ms must be between 1 and 5000, got {}",
                self.tui.double_click_ms
            )));
        }
        if self.browser.bundle_extensions.iter().any(|e| e.is_empty()) {
            return Err(ConfigError::Invalid(
                "browser.bundle_extensions must not contain empty entries".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tui.cell_width, 16);
        assert_eq!(config.tui.double_click_ms, 500);
    }

    #[test]
    fn config_serializes_to_toml() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[browser]"));
        assert!(toml_str.contains("[tui]"));
    }

    #[test]
    fn default_bundle_extensions() {
        let config = BrowserConfig::default();
        assert!(config.bundle_extensions.contains(&"app".to_string()));
        assert!(config.bundle_extensions.contains(&"bundle".to_string()));
        assert!(config.detect_app_dirs);
    }

    #[test]
    fn normalize_strips_dots_and_case() {
        let mut config = Config::default();
        config.browser.bundle_extensions = vec![".APP".to_string(), " Bundle ".to_string()];
        config.normalize();
        assert_eq!(config.browser.bundle_extensions, vec!["app", "bundle"]);
    }

    #[test]
    fn rejects_narrow_cells() {
        let mut config = Config::default();
        config.tui.cell_width = 4;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_double_click() {
        let mut config = Config::default();
        config.tui.double_click_ms = 0;
        assert!(config.validate().is_err());
    }
}
