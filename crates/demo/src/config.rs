// File: crates/demo/src/config.rs
// Summary: TOML configuration for the CLI (viewport, theme, output dir, CSV dates, logging).
// Environment variables override file values: DASHCHART_THEME, DASHCHART_OUT_DIR, DASHCHART_LOG_LEVEL.

use std::path::{Path, PathBuf};

use dashchart_core::{theme, Theme, Viewport};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub csv: CsvConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Viewport and theme used for every render.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_width")]
    pub width: u32,

    /// Height of the surrounding container; charts that fill their parent take it.
    #[serde(default = "default_height")]
    pub height: u32,

    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_width() -> u32 {
    dashchart_core::types::WIDTH
}

fn default_height() -> u32 {
    dashchart_core::types::PARENT_HEIGHT
}

fn default_theme() -> String {
    "light".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { width: default_width(), height: default_height(), theme: default_theme() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_out_dir")]
    pub dir: String,
}

fn default_out_dir() -> String {
    "target/out".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { dir: default_out_dir() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CsvConfig {
    /// strftime pattern applied when the first CSV column holds ISO dates.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_date_format() -> String {
    "%b %d".to_string()
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self { date_format: default_date_format() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Used when RUST_LOG is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level() }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse { path: path.to_path_buf(), error },
            other => other,
        })
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse { path: PathBuf::new(), error: e.to_string() })
    }

    /// `<config dir>/dashchart/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dashchart").join("config.toml"))
    }

    /// Explicit path if given (must load), else the default path if it exists, else defaults.
    /// Returns the path actually read.
    pub fn resolve(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        let path = match explicit {
            Some(p) => Some(p.to_path_buf()),
            None => Self::default_path().filter(|p| p.exists()),
        };
        let mut config = match &path {
            Some(p) => Self::load(p)?,
            None => Self::default(),
        };
        config.apply_env_overrides();
        Ok((config, path))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(theme) = std::env::var("DASHCHART_THEME") {
            self.render.theme = theme;
        }
        if let Ok(dir) = std::env::var("DASHCHART_OUT_DIR") {
            self.output.dir = dir;
        }
        if let Ok(level) = std::env::var("DASHCHART_LOG_LEVEL") {
            self.logging.level = level;
        }
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.render.width.max(1), self.render.height.max(1))
    }

    /// Unknown theme names fall back to light.
    pub fn theme(&self) -> Theme {
        theme::find(&self.render.theme)
    }

    pub fn out_dir(&self) -> PathBuf {
        PathBuf::from(&self.output.dir)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Commented default config, printed by `dashchart config`.
pub fn generate_default_config() -> String {
    r#"# dashchart configuration
#
# Environment variables override these settings:
# - DASHCHART_THEME
# - DASHCHART_OUT_DIR
# - DASHCHART_LOG_LEVEL

[render]
# Viewport width in pixels
width = 640

# Parent container height; used by charts with maintainAspectRatio = false
height = 400

# Theme preset: light, dark, slate
theme = "light"

[output]
# Where rendered files go when no --out is given
dir = "target/out"

[csv]
# strftime pattern for ISO-date category columns
date_format = "%b %d"

[logging]
# Log level when RUST_LOG is unset: trace, debug, info, warn, error
level = "info"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.render.width, 640);
        assert_eq!(config.render.height, 400);
        assert_eq!(config.render.theme, "light");
        assert_eq!(config.output.dir, "target/out");
        assert_eq!(config.csv.date_format, "%b %d");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::parse("[render]\ntheme = \"dark\"\nwidth = 800\n").unwrap();
        assert_eq!(config.render.width, 800);
        assert_eq!(config.render.height, 400);
        assert_eq!(config.theme().name, "dark");
        assert_eq!(config.viewport().width, 800);
    }

    #[test]
    fn generated_default_matches_builtin_defaults() {
        let parsed = Config::parse(&generate_default_config()).unwrap();
        let builtin = Config::default();
        assert_eq!(parsed.render.width, builtin.render.width);
        assert_eq!(parsed.render.height, builtin.render.height);
        assert_eq!(parsed.render.theme, builtin.render.theme);
        assert_eq!(parsed.output.dir, builtin.output.dir);
        assert_eq!(parsed.csv.date_format, builtin.csv.date_format);
    }

    #[test]
    fn unknown_theme_falls_back_to_light() {
        let config = Config::parse("[render]\ntheme = \"neon\"\n").unwrap();
        assert_eq!(config.theme(), Theme::light());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Config::parse("[render\nwidth = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
