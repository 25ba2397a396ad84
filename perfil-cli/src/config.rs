//! Configuration handling for the perfil CLI
//!
//! Supports loading configuration from perfil.toml files with CLI argument
//! overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub print: PrintConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Pixels per meter of depth
    #[serde(default = "default_scale")]
    pub scale: f64,

    /// Full-scale VOC value in PPM for the trend column
    #[serde(default = "default_max_voc")]
    pub max_voc: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scale: default_scale(),
            max_voc: default_max_voc(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrintConfig {
    /// Page format: "a4" or "a3"
    #[serde(default = "default_format")]
    pub format: String,

    /// Page margins in millimeters
    #[serde(default = "default_margin_top")]
    pub margin_top: f64,
    #[serde(default = "default_margin_bottom")]
    pub margin_bottom: f64,
    #[serde(default = "default_margin_left")]
    pub margin_left: f64,
    #[serde(default = "default_margin_right")]
    pub margin_right: f64,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            margin_top: default_margin_top(),
            margin_bottom: default_margin_bottom(),
            margin_left: default_margin_left(),
            margin_right: default_margin_right(),
        }
    }
}

fn default_scale() -> f64 {
    10.0
}

fn default_max_voc() -> f64 {
    100.0
}

fn default_format() -> String {
    "a4".to_string()
}

fn default_margin_top() -> f64 {
    10.0
}

fn default_margin_bottom() -> f64 {
    15.0
}

fn default_margin_left() -> f64 {
    10.0
}

fn default_margin_right() -> f64 {
    10.0
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => {
                log::info!("Loading configuration from: {}", path.display());
                Self::load_from_file(path)?
            }
            None => {
                // Try to find perfil.toml in current directory
                let default_path = PathBuf::from("perfil.toml");
                if default_path.exists() {
                    log::info!("Loading configuration from: perfil.toml");
                    Self::load_from_file(&default_path)?
                } else {
                    log::info!("Using default configuration");
                    Self::default()
                }
            }
        };

        Ok(config)
    }

    /// Load configuration from a specific TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write configuration file: {}", path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_layout_constants() {
        let config = Config::default();
        assert_eq!(config.render.scale, 10.0);
        assert_eq!(config.render.max_voc, 100.0);
        assert_eq!(config.print.format, "a4");
        assert_eq!(config.print.margin_bottom, 15.0);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: Config =
            toml::from_str("[render]\nmax_voc = 50.0\n\n[print]\nformat = \"a3\"\n").unwrap();
        assert_eq!(config.render.max_voc, 50.0);
        assert_eq!(config.print.format, "a3");
        assert_eq!(config.print.margin_top, 10.0);
        assert_eq!(config.render.scale, 10.0);
    }

    #[test]
    fn round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("perfil.toml");
        let mut config = Config::default();
        config.render.scale = 12.5;
        config.save_to_file(&path).unwrap();
        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.render.scale, 12.5);
    }
}
