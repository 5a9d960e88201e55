// SPDX-License-Identifier: MPL-2.0
//! This module handles the message bar configuration, including loading and
//! saving it to a `message_bar.toml` file.
//!
//! # Configuration Sections
//!
//! - `[timing]` - Auto-hide and copy confirmation durations
//! - `[layout]` - Anchoring, line clamping and padding
//! - `[copy]` - Copy action behavior
//!
//! Every field is optional in the file; missing values fall back to the
//! constants in [`defaults`]. [`Config::resolve`] turns the file form into a
//! [`MessageBarConfig`] with every value present and clamped.
//!
//! # Path Resolution
//!
//! 1. Explicit directory passed to the `_with_override()` functions
//! 2. `MESSAGE_BAR_CONFIG_DIR` environment variable
//! 3. Platform config directory (via `dirs`)
//!
//! # Examples
//!
//! ```no_run
//! use iced_message_bar::config::{self, Position};
//!
//! let (mut config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//!
//! config.layout.position = Some(Position::Bottom);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::bar::VisibilityDuration;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILE: &str = "message_bar.toml";
const APP_NAME: &str = "IcedMessageBar";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "MESSAGE_BAR_CONFIG_DIR";

// =============================================================================
// Enums and Newtypes
// =============================================================================

/// Edge of the content the bar is anchored to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    #[default]
    Top,
    Bottom,
}

impl FromStr for Position {
    type Err = String;

    fn from_str(raw: &str) -> std::result::Result<Self, Self::Err> {
        match raw.to_lowercase().as_str() {
            "top" => Ok(Position::Top),
            "bottom" => Ok(Position::Bottom),
            other => Err(format!("invalid position: {other} (expected top or bottom)")),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Top => f.write_str("top"),
            Position::Bottom => f.write_str("bottom"),
        }
    }
}

/// Maximum number of text lines the renderer shows before clipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxLines(u16);

impl MaxLines {
    /// Creates a line clamp, clamping to the valid range.
    #[must_use]
    pub fn new(value: u16) -> Self {
        Self(value.clamp(MIN_MAX_LINES, MAX_MAX_LINES))
    }

    #[must_use]
    pub fn value(self) -> u16 {
        self.0
    }

    /// Returns true when the text must stay on a single line.
    #[must_use]
    pub fn is_single(self) -> bool {
        self.0 == 1
    }
}

impl Default for MaxLines {
    fn default() -> Self {
        Self(DEFAULT_SUCCESS_MAX_LINES)
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// Durations, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimingConfig {
    /// Time before the bar auto-hides.
    #[serde(
        default = "default_visibility_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub visibility_duration_ms: Option<u64>,

    /// Time the "Copied!" confirmation stays visible.
    #[serde(
        default = "default_confirmation_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub confirmation_duration_ms: Option<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            visibility_duration_ms: default_visibility_duration_ms(),
            confirmation_duration_ms: default_confirmation_duration_ms(),
        }
    }
}

/// Placement and text clamping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,

    #[serde(
        default = "default_error_max_lines",
        skip_serializing_if = "Option::is_none"
    )]
    pub error_max_lines: Option<u16>,

    #[serde(
        default = "default_success_max_lines",
        skip_serializing_if = "Option::is_none"
    )]
    pub success_max_lines: Option<u16>,

    #[serde(
        default = "default_vertical_padding",
        skip_serializing_if = "Option::is_none"
    )]
    pub vertical_padding: Option<f32>,

    #[serde(
        default = "default_horizontal_padding",
        skip_serializing_if = "Option::is_none"
    )]
    pub horizontal_padding: Option<f32>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            position: Some(Position::default()),
            error_max_lines: default_error_max_lines(),
            success_max_lines: default_success_max_lines(),
            vertical_padding: default_vertical_padding(),
            horizontal_padding: default_horizontal_padding(),
        }
    }
}

/// Copy action settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CopyConfig {
    /// Show a transient "Copied!" confirmation after copying an error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_confirmation_on_copy: Option<bool>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Message bar configuration as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub timing: TimingConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub copy: CopyConfig,
}

/// Fully resolved settings handed to the message bar at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MessageBarConfig {
    pub visibility_duration: VisibilityDuration,
    pub confirmation_duration: VisibilityDuration,
    pub position: Position,
    pub error_max_lines: MaxLines,
    pub success_max_lines: MaxLines,
    pub vertical_padding: f32,
    pub horizontal_padding: f32,
    pub show_confirmation_on_copy: bool,
}

impl Default for MessageBarConfig {
    fn default() -> Self {
        Config::default().resolve()
    }
}

impl Config {
    /// Fills missing values with defaults and clamps the rest.
    #[must_use]
    pub fn resolve(&self) -> MessageBarConfig {
        let padding = |value: Option<f32>, default: f32| {
            value
                .filter(|padding| padding.is_finite() && *padding >= 0.0)
                .unwrap_or(default)
        };

        MessageBarConfig {
            visibility_duration: VisibilityDuration::from_millis(
                self.timing
                    .visibility_duration_ms
                    .unwrap_or(DEFAULT_VISIBILITY_DURATION_MS),
            ),
            confirmation_duration: VisibilityDuration::from_millis(
                self.timing
                    .confirmation_duration_ms
                    .unwrap_or(DEFAULT_CONFIRMATION_DURATION_MS),
            ),
            position: self.layout.position.unwrap_or_default(),
            error_max_lines: MaxLines::new(
                self.layout
                    .error_max_lines
                    .unwrap_or(DEFAULT_ERROR_MAX_LINES),
            ),
            success_max_lines: MaxLines::new(
                self.layout
                    .success_max_lines
                    .unwrap_or(DEFAULT_SUCCESS_MAX_LINES),
            ),
            vertical_padding: padding(self.layout.vertical_padding, DEFAULT_VERTICAL_PADDING),
            horizontal_padding: padding(
                self.layout.horizontal_padding,
                DEFAULT_HORIZONTAL_PADDING,
            ),
            show_confirmation_on_copy: self.copy.show_confirmation_on_copy.unwrap_or(false),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_visibility_duration_ms() -> Option<u64> {
    Some(DEFAULT_VISIBILITY_DURATION_MS)
}

fn default_confirmation_duration_ms() -> Option<u64> {
    Some(DEFAULT_CONFIRMATION_DURATION_MS)
}

fn default_error_max_lines() -> Option<u16> {
    Some(DEFAULT_ERROR_MAX_LINES)
}

fn default_success_max_lines() -> Option<u16> {
    Some(DEFAULT_SUCCESS_MAX_LINES)
}

fn default_vertical_padding() -> Option<f32> {
    Some(DEFAULT_VERTICAL_PADDING)
}

fn default_horizontal_padding() -> Option<f32> {
    Some(DEFAULT_HORIZONTAL_PADDING)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory, honoring the override and the environment.
#[must_use]
pub fn config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = base_dir {
        return Some(dir);
    }
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR).filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config with a warning explaining what went wrong.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
#[must_use]
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "using default message bar config");
                    return (
                        Config::default(),
                        Some(format!("Could not read {}: {err}", path.display())),
                    );
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

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
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

// =============================================================================
// Tests
// =============================================================================
