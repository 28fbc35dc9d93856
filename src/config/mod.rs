// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[display]` - Background color and splitter line style
//! - `[split_view]` - Initial view mode, zoom box and grid settings
//! - `[playback]` - Frame rate for image sequences
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument (see [`init_cli_override`])
//! 3. `SPLIT_LENS_CONFIG_DIR` environment variable
//! 4. Platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use split_lens::config::{self, Config};
//! use std::path::Path;
//!
//! let mut config = Config::default();
//! config.general.language = Some("fr".to_string());
//! config::save_to_path(&config, Path::new("settings.toml")).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "SplitLens";

/// Environment variable overriding the config directory.
pub const ENV_CONFIG_DIR: &str = "SPLIT_LENS_CONFIG_DIR";

/// Global CLI override for the config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

// =============================================================================
// Enums (shared between sections)
// =============================================================================

/// How the divider between the two panes is drawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SplitterStyle {
    /// A full-height line.
    #[default]
    SolidLine,
    /// Small triangles at the top and bottom edges.
    Handlers,
}

/// How two selected items share the widget when splitting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Each item is centered in its own half.
    #[default]
    SideBySide,
    /// Both items share the widget center; the splitter reveals one or the other.
    Comparison,
}

impl ViewMode {
    pub const ALL: [ViewMode; 2] = [ViewMode::SideBySide, ViewMode::Comparison];

    /// Maps a combo box index to a mode. Unknown indices yield `None`.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            ViewMode::SideBySide => 0,
            ViewMode::Comparison => 1,
        }
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Display settings re-read on `ReloadSettings`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Widget and zoom box background, as `#rrggbb`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub splitter_style: Option<SplitterStyle>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            background_color: Some(DEFAULT_BACKGROUND_COLOR.to_string()),
            splitter_style: Some(SplitterStyle::default()),
        }
    }
}

/// Initial split view settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SplitViewConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_mode: Option<ViewMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom_box_enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_enabled: Option<bool>,

    /// Grid spacing in item pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_size: Option<u32>,
}

impl Default for SplitViewConfig {
    fn default() -> Self {
        Self {
            view_mode: Some(ViewMode::default()),
            zoom_box_enabled: Some(false),
            grid_enabled: Some(false),
            grid_size: Some(DEFAULT_GRID_SIZE),
        }
    }
}

/// Image sequence playback settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaybackConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fps: Option<u32>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            fps: Some(DEFAULT_FPS),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub split_view: SplitViewConfig,
    #[serde(default)]
    pub playback: PlaybackConfig,
}

impl Config {
    /// Background color, falling back to the default when missing or malformed.
    #[must_use]
    pub fn background_color(&self) -> Color {
        self.display
            .background_color
            .as_deref()
            .and_then(parse_hex_color)
            .or_else(|| parse_hex_color(DEFAULT_BACKGROUND_COLOR))
            .unwrap_or(Color::BLACK)
    }

    #[must_use]
    pub fn splitter_style(&self) -> SplitterStyle {
        self.display.splitter_style.unwrap_or_default()
    }

    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.split_view.view_mode.unwrap_or_default()
    }

    #[must_use]
    pub fn zoom_box_enabled(&self) -> bool {
        self.split_view.zoom_box_enabled.unwrap_or(false)
    }

    #[must_use]
    pub fn grid_enabled(&self) -> bool {
        self.split_view.grid_enabled.unwrap_or(false)
    }

    #[must_use]
    pub fn grid_size(&self) -> u32 {
        self.split_view
            .grid_size
            .unwrap_or(DEFAULT_GRID_SIZE)
            .clamp(MIN_GRID_SIZE, MAX_GRID_SIZE)
    }

    #[must_use]
    pub fn fps(&self) -> u32 {
        self.playback.fps.unwrap_or(DEFAULT_FPS).clamp(MIN_FPS, MAX_FPS)
    }
}

/// Parses `#rrggbb` (the leading `#` is optional) into an opaque color.
#[must_use]
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Records the `--config-dir` CLI argument. Later calls are ignored.
pub fn init_cli_override(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        log::warn!("config directory override already initialized");
    }
}

/// Returns the config directory, honoring (in order) the explicit override,
/// the CLI argument, the environment variable and the platform default.
#[must_use]
pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = CLI_CONFIG_DIR.get().and_then(Clone::clone) {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("failed to load {}: {err}", path.display());
                    return (Config::default(), Some("config-load-error".to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
