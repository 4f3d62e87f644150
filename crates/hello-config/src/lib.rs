//! Configuration for the hello app.
//!
//! Read from `config.toml` in the platform config directory. Every field
//! is optional; missing values fall back to the defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use color_eyre::eyre::{WrapErr, bail, ensure};
use directories::ProjectDirs;
use hello_core::{DEFAULT_CANVAS, LABEL_SIZE, Size};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Name of the config file inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub canvas: CanvasConfig,
    pub animation: AnimationConfig,
    pub label: LabelConfig,
}

/// Logical canvas dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS.width,
            height: DEFAULT_CANVAS.height,
        }
    }
}

impl CanvasConfig {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Timing of the bounce loop and the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Pause between bounce loop iterations.
    pub tick_ms: u64,
    /// How long a label takes to travel to its next border point.
    pub move_duration_ms: u64,
    /// Event poll timeout, which is also the redraw interval.
    pub frame_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            tick_ms: 50,
            move_duration_ms: 1000,
            frame_ms: 33,
        }
    }
}

impl AnimationConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn move_duration(&self) -> Duration {
        Duration::from_millis(self.move_duration_ms)
    }

    pub fn frame(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}

/// Label appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Colors given to labels in creation order, cycling.
    pub colors: Vec<String>,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            colors: vec!["white".to_string()],
        }
    }
}

impl LabelConfig {
    /// Parsed palette. Names that fail to parse are skipped.
    pub fn palette(&self) -> Vec<Color> {
        self.colors
            .iter()
            .filter_map(|name| Color::from_str(name).ok())
            .collect()
    }
}

impl Config {
    /// Path of the config file, if the platform has a config directory.
    pub fn path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "hello").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load from the default location. A missing file yields the defaults.
    pub fn load() -> color_eyre::Result<Self> {
        match Self::path() {
            Some(path) if path.exists() => Self::load_from_path(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load like [`Config::load`], logging a warning and using the
    /// defaults when the file cannot be used.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("using default configuration: {err:#}");
                Self::default()
            }
        }
    }

    pub fn load_from_path(path: &Path) -> color_eyre::Result<Self> {
        let content = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&content)
            .wrap_err_with(|| format!("invalid config file {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Render as a TOML document.
    pub fn to_toml(&self) -> color_eyre::Result<String> {
        toml::to_string_pretty(self).wrap_err("failed to serialize configuration")
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(content: &str) -> color_eyre::Result<Self> {
        let config: Config = toml::from_str(content).wrap_err("failed to parse TOML")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> color_eyre::Result<()> {
        ensure!(
            self.canvas.width.is_finite() && self.canvas.height.is_finite(),
            "canvas size {}x{} must be finite",
            self.canvas.width,
            self.canvas.height
        );
        ensure!(
            self.canvas.width > LABEL_SIZE.width,
            "canvas width {} must exceed the label width {}",
            self.canvas.width,
            LABEL_SIZE.width
        );
        ensure!(
            self.canvas.height > 3.0 * LABEL_SIZE.height,
            "canvas height {} must exceed three label heights ({})",
            self.canvas.height,
            3.0 * LABEL_SIZE.height
        );
        ensure!(self.animation.tick_ms > 0, "animation.tick_ms must be positive");
        ensure!(self.animation.frame_ms > 0, "animation.frame_ms must be positive");
        if self.label.colors.is_empty() {
            bail!("label.colors must name at least one color");
        }
        if let Some(bad) = self
            .label
            .colors
            .iter()
            .find(|name| Color::from_str(name).is_err())
        {
            bail!("unknown label color {bad:?}");
        }
        Ok(())
    }
}
