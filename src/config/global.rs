//! # Global Configuration
//!
//! Handles the user configuration stored at `~/.config/lootlist/config`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{cell::RefCell, fs, path::PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    constants::{APP_DIR, DEFAULT_DATA_FILENAME, DEFAULT_LOG_LEVEL, GLOBAL_CONFIG_FILENAME},
    id::DEFAULT_PATTERN,
};

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by integration tests to redirect config and data to a temp
    /// directory without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

/// Home directory, honoring the test override.
pub fn home_dir() -> Option<PathBuf> {
    HOME_OVERRIDE
        .with(|cell| cell.borrow().clone())
        .or_else(dirs::home_dir)
}

/// Global configuration stored at ~/.config/lootlist/config
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Tracker data file (default: ~/.local/share/lootlist/items.json)
    #[serde(default)]
    pub data_file: Option<String>,

    /// Whether to enable interactive selection screens
    #[serde(default = "default_true")]
    pub interactive: bool,

    /// Pattern for new item IDs
    #[serde(default = "default_id_pattern")]
    pub id_pattern: String,

    /// Default log filter when LOOTLIST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            interactive: true,
            id_pattern: DEFAULT_PATTERN.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[allow(clippy::missing_const_for_fn)] // serde default functions can't be const
fn default_true() -> bool {
    true
}

fn default_id_pattern() -> String {
    DEFAULT_PATTERN.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl GlobalConfig {
    /// Returns the path to the global config file (~/.config/lootlist/config)
    ///
    /// Uses $HOME/.config for XDG compliance (not dirs::config_dir which varies by OS).
    pub fn path() -> Option<PathBuf> {
        home_dir().map(|home| {
            home.join(".config")
                .join(APP_DIR)
                .join(GLOBAL_CONFIG_FILENAME)
        })
    }

    /// Loads the global config. A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::path() else {
            debug!("no home directory, using default config");
            return Ok(Self::default());
        };

        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read global config: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse global config: {}", path.display()))
    }

    /// Creates the global config with default values and comments.
    /// Used by `loot setup`. Returns true if created, false if already exists.
    pub fn create_default_if_missing() -> Result<bool> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine home directory");
        };

        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        Self::save_with_comments(&path, &Self::default())?;
        Ok(true)
    }

    /// Saves config with comments for all options.
    ///
    /// `data_file` is shown as a commented example when not set.
    fn save_with_comments(path: &PathBuf, config: &Self) -> Result<()> {
        let data_file_line = config.data_file.as_ref().map_or_else(
            || "# data_file = \"~/games/teyvat.json\"".to_string(),
            |v| format!("data_file = \"{v}\""),
        );

        let content = format!(
            r#"# lootlist Global Configuration
# Location: ~/.config/lootlist/config

# Where the item list is stored. A leading "~/" expands to your home directory.
# Can be overridden per invocation with --file.
# Default: ~/.local/share/lootlist/items.json
{data_file_line}

# Whether to show selection screens when a command needs an item and none
# was given (only when running in a terminal).
# Default: true
interactive = {interactive}

# Pattern for generating item IDs.
# Default: "%T%RR" (e.g., "0A2BK4")
#
# Available tokens:
#   %y  - Year (2 digits)
#   %m  - Month (2 digits, 01-12)
#   %d  - Day of month (2 digits, 01-31)
#   %j  - Day of year (3 digits, 001-366)
#   %T  - Time as Base32 (4 chars) - seconds since midnight UTC
#   %R  - Random Base32 character (repeat for more: %RRR = 3 chars)
#   %%  - Literal percent sign
id_pattern = "{id_pattern}"

# Log filter used when LOOTLIST_LOG is not set (error, warn, info, debug, trace).
# Default: "warn"
log_level = "{log_level}"
"#,
            interactive = config.interactive,
            id_pattern = config.id_pattern,
            log_level = config.log_level,
        );

        fs::write(path, content)
            .with_context(|| format!("Failed to write global config: {}", path.display()))
    }

    /// Resolves the data file path.
    ///
    /// Expands a leading `~/`; falls back to ~/.local/share/lootlist/items.json.
    pub fn data_path(&self) -> Result<PathBuf> {
        match self.data_file.as_deref() {
            Some(raw) => match raw.strip_prefix("~/") {
                Some(rest) => Ok(require_home()?.join(rest)),
                None => Ok(PathBuf::from(raw)),
            },
            None => Ok(require_home()?
                .join(".local")
                .join("share")
                .join(APP_DIR)
                .join(DEFAULT_DATA_FILENAME)),
        }
    }
}

fn require_home() -> Result<PathBuf> {
    home_dir().ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))
}
