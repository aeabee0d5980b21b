// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, loading the notification
//! defaults from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[notification]` - Auto-dismiss duration and top offset
//! - `[transition]` - Enter/exit fade timings
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_TOAST_CONFIG_DIR` environment variable (or `--config-dir`)
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::app::config;
//!
//! let (config, _warning) = config::load();
//! let defaults = config.defaults();
//! assert!(defaults.duration.as_millis() <= u128::from(config::MAX_DURATION_MS));
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::notifications::Defaults;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Notification behaviour settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationConfig {
    /// Auto-dismiss delay in milliseconds, `0` keeps toasts until closed.
    #[serde(default = "default_duration_ms", skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,

    /// Distance from the top of the overlay root.
    #[serde(default = "default_top_offset", skip_serializing_if = "Option::is_none")]
    pub top_offset: Option<f32>,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            top_offset: default_top_offset(),
        }
    }
}

/// Enter/exit transition settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransitionConfig {
    #[serde(default = "default_enter_ms", skip_serializing_if = "Option::is_none")]
    pub enter_ms: Option<u64>,

    #[serde(default = "default_exit_ms", skip_serializing_if = "Option::is_none")]
    pub exit_ms: Option<u64>,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            enter_ms: default_enter_ms(),
            exit_ms: default_exit_ms(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub notification: NotificationConfig,

    #[serde(default)]
    pub transition: TransitionConfig,
}

impl Config {
    /// Resolves the configured values into widget defaults, clamping
    /// out-of-range entries.
    #[must_use]
    pub fn defaults(&self) -> Defaults {
        let duration_ms = self
            .notification
            .duration_ms
            .unwrap_or(DEFAULT_DURATION_MS)
            .min(MAX_DURATION_MS);
        let top_offset = self
            .notification
            .top_offset
            .filter(|top| top.is_finite())
            .unwrap_or(DEFAULT_TOP_OFFSET)
            .clamp(0.0, MAX_TOP_OFFSET);
        let enter_ms = self
            .transition
            .enter_ms
            .unwrap_or(DEFAULT_ENTER_MS)
            .min(MAX_TRANSITION_MS);
        let exit_ms = self
            .transition
            .exit_ms
            .unwrap_or(DEFAULT_EXIT_MS)
            .min(MAX_TRANSITION_MS);

        Defaults {
            duration: Duration::from_millis(duration_ms),
            top_offset,
            enter: Duration::from_millis(enter_ms),
            exit: Duration::from_millis(exit_ms),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_duration_ms() -> Option<u64> {
    Some(DEFAULT_DURATION_MS)
}

fn default_top_offset() -> Option<f32> {
    Some(DEFAULT_TOP_OFFSET)
}

fn default_enter_ms() -> Option<u64> {
    Some(DEFAULT_ENTER_MS)
}

fn default_exit_ms() -> Option<u64> {
    Some(DEFAULT_EXIT_MS)
}

// =============================================================================
// Path Functions
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
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
/// default config with a warning message explaining what went wrong.
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
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (Config::default(), Some(err.to_string()));
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

/// Writes a settings file to `path`. The demo never writes settings itself;
/// this exists for tooling and tests that prepare a `settings.toml`.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
