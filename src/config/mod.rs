// SPDX-License-Identifier: MPL-2.0
//! This module handles the notification settings, including loading and
//! saving them to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[notifications]` - Pool and history capacities, default lifetime
//! - `[display]` - Opacity, fading and stacking layout used by renderers
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `HOVER_NOTIFY_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use hover_notify::config;
//!
//! let (mut config, _warning) = config::load();
//! config.notifications.max_history = Some(100);
//! config::save(&config).expect("Failed to save config");
//!
//! // Snapshot handed to the notification center every frame
//! let settings = config.snapshot();
//! assert_eq!(settings.max_history, 100);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::notifications::Opacity;
use crate::error::Result;
use crate::notifications::{DisplayTuning, NotificationSettings};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "HoverNotify";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "HOVER_NOTIFY_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// Capacity and timing settings read by the notification center.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// Maximum number of simultaneously visible notifications.
    #[serde(
        default = "default_max_notifications",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_notifications: Option<i64>,

    /// Number of texts kept in the history log.
    #[serde(default = "default_max_history", skip_serializing_if = "Option::is_none")]
    pub max_history: Option<i64>,

    /// Lifetime used when a caller does not request one (seconds).
    #[serde(
        default = "default_duration_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_duration_secs: Option<f32>,

    /// Keep the history log when the host resets (map or session change).
    #[serde(
        default = "default_keep_history_on_reset",
        skip_serializing_if = "Option::is_none"
    )]
    pub keep_history_on_reset: Option<bool>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            max_notifications: default_max_notifications(),
            max_history: default_max_history(),
            default_duration_secs: default_duration_secs(),
            keep_history_on_reset: default_keep_history_on_reset(),
        }
    }
}

/// Display tuning consumed by renderers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Global opacity (0.0 to 1.0).
    #[serde(default = "default_opacity", skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,

    /// Whether notifications fade in and out.
    #[serde(
        default = "default_fade_enabled",
        skip_serializing_if = "Option::is_none"
    )]
    pub fade_enabled: Option<bool>,

    /// Vertical distance between stacked notifications.
    #[serde(default = "default_spacing", skip_serializing_if = "Option::is_none")]
    pub spacing: Option<f32>,

    /// Distance from the top of the viewport to the first notification.
    #[serde(default = "default_top_margin", skip_serializing_if = "Option::is_none")]
    pub top_margin: Option<f32>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            opacity: default_opacity(),
            fade_enabled: default_fade_enabled(),
            spacing: default_spacing(),
            top_margin: default_top_margin(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Notification configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Capacity and timing settings.
    #[serde(default)]
    pub notifications: NotificationsConfig,

    /// Renderer settings.
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Builds the read-only snapshot polled by the notification center.
    ///
    /// Capacities are passed through unclamped; the capacity watcher owns
    /// that rule.
    #[must_use]
    pub fn snapshot(&self) -> NotificationSettings {
        let n = &self.notifications;
        let d = &self.display;
        NotificationSettings {
            max_notifications: n.max_notifications.unwrap_or(DEFAULT_MAX_NOTIFICATIONS),
            max_history: n.max_history.unwrap_or(DEFAULT_MAX_HISTORY),
            default_duration_secs: n.default_duration_secs.unwrap_or(DEFAULT_DURATION_SECS),
            keep_history_on_reset: n
                .keep_history_on_reset
                .unwrap_or(DEFAULT_KEEP_HISTORY_ON_RESET),
            display: DisplayTuning {
                opacity: Opacity::new(d.opacity.unwrap_or(DEFAULT_OPACITY)),
                fade_enabled: d.fade_enabled.unwrap_or(DEFAULT_FADE_ENABLED),
                spacing: d.spacing.unwrap_or(DEFAULT_STACK_SPACING),
                top_margin: d.top_margin.unwrap_or(DEFAULT_TOP_MARGIN),
            },
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_max_notifications() -> Option<i64> {
    Some(DEFAULT_MAX_NOTIFICATIONS)
}

fn default_max_history() -> Option<i64> {
    Some(DEFAULT_MAX_HISTORY)
}

fn default_duration_secs() -> Option<f32> {
    Some(DEFAULT_DURATION_SECS)
}

fn default_keep_history_on_reset() -> Option<bool> {
    Some(DEFAULT_KEEP_HISTORY_ON_RESET)
}

fn default_opacity() -> Option<f32> {
    Some(DEFAULT_OPACITY)
}

fn default_fade_enabled() -> Option<bool> {
    Some(DEFAULT_FADE_ENABLED)
}

fn default_spacing() -> Option<f32> {
    Some(DEFAULT_STACK_SPACING)
}

fn default_top_margin() -> Option<f32> {
    Some(DEFAULT_TOP_MARGIN)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory: explicit override, then the environment
/// variable, then the platform default.
fn get_config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if base_dir.is_some() {
        return base_dir;
    }
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    get_config_dir_with_override(base_dir).map(|mut path| {
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
/// default config with a warning naming the file and the error.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to load settings, using defaults"
                    );
                    return (
                        Config::default(),
                        Some(format!("{}: {err}", path.display())),
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
    Ok(toml::from_str(&content)?)
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

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
