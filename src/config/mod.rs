//! # Configuration
//!
//! Global settings (~/.config/lootlist/config) merged with per-invocation
//! command-line overrides.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod global;

use std::path::PathBuf;

use anyhow::Result;

pub use self::global::{home_dir, set_home_override, GlobalConfig};

/// Effective configuration, command-line overrides applied on top of the file
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,

    /// Data file given with --file
    data_file_override: Option<PathBuf>,
}

impl Config {
    /// Loads the global configuration
    pub fn load() -> Result<Self> {
        Ok(Self {
            global: GlobalConfig::load()?,
            data_file_override: None,
        })
    }

    /// Overrides the data file location
    #[must_use]
    pub fn with_data_file(mut self, path: Option<PathBuf>) -> Self {
        self.data_file_override = path;
        self
    }

    /// Returns the effective data file path
    pub fn data_path(&self) -> Result<PathBuf> {
        match self.data_file_override {
            Some(ref path) => Ok(path.clone()),
            None => self.global.data_path(),
        }
    }

    /// Returns the effective ID pattern
    pub fn id_pattern(&self) -> &str {
        &self.global.id_pattern
    }

    /// Whether interactive selection is enabled
    pub const fn interactive(&self) -> bool {
        self.global.interactive
    }

    /// Returns the configured log filter
    pub fn log_level(&self) -> &str {
        &self.global.log_level
    }
}
