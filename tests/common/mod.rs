//! # Test Harness
//!
//! Provides utilities for integration testing lootlist without affecting user
//! configuration or data. Uses a thread-local home override instead of
//! environment variables for in-process tests.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use assert_cmd::Command;
use tempfile::TempDir;

use lootlist::{set_home_override, Config, Tracker};

/// Global lock so tests sharing process-wide state run one at a time.
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Test environment with a temporary home directory.
pub struct TestEnv {
    /// Temporary directory simulating the user's home
    pub home_dir: TempDir,
    /// Guard for the test lock
    test_guard: std::sync::MutexGuard<'static, ()>,
}

impl TestEnv {
    /// Creates a new test environment and points the home override at it.
    pub fn new() -> Self {
        // Recover from poisoned mutex (if a previous test panicked while holding the lock)
        let test_guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let home_dir = TempDir::new().expect("Failed to create temp home dir");
        set_home_override(Some(home_dir.path().to_path_buf()));
        Self {
            home_dir,
            test_guard,
        }
    }

    /// Returns the home directory path.
    pub fn home(&self) -> &Path {
        self.home_dir.path()
    }

    /// Returns the path where global config would be stored.
    pub fn global_config_path(&self) -> PathBuf {
        self.home().join(".config").join("lootlist").join("config")
    }

    /// Returns the default data file path.
    pub fn data_path(&self) -> PathBuf {
        self.home()
            .join(".local")
            .join("share")
            .join("lootlist")
            .join("items.json")
    }

    /// Creates a global config file with the given content.
    pub fn write_global_config(&self, content: &str) {
        let path = self.global_config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create global config directory");
        }
        fs::write(path, content).expect("Failed to write global config");
    }

    /// Reads the global config file content.
    pub fn read_global_config(&self) -> String {
        fs::read_to_string(self.global_config_path()).unwrap_or_default()
    }

    /// Writes raw content to the default data file.
    pub fn write_data(&self, content: &str) {
        let path = self.data_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create data directory");
        }
        fs::write(path, content).expect("Failed to write data file");
    }

    /// Reads the default data file content.
    pub fn read_data(&self) -> String {
        fs::read_to_string(self.data_path()).expect("Failed to read data file")
    }

    /// Parses the default data file as JSON.
    pub fn read_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.read_data()).expect("Data file is not valid JSON")
    }

    /// Loads the effective config.
    pub fn config(&self) -> Config {
        Config::load().expect("config should load")
    }

    /// Opens the tracker at the default data file.
    pub fn tracker(&self) -> Tracker {
        Tracker::open(self.data_path()).expect("tracker should open")
    }

    /// `loot` binary with HOME pointed at the temp home.
    pub fn loot(&self) -> Command {
        let mut cmd = Command::cargo_bin("loot").expect("binary should build");
        cmd.env("HOME", self.home());
        cmd.env_remove("LOOTLIST_LOG");
        cmd
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        set_home_override(None);
    }
}

/// Creates a test environment with interactive selection disabled.
pub fn setup_test_env() -> TestEnv {
    let env = TestEnv::new();
    env.write_global_config(&GlobalConfigBuilder::new().build());
    env
}

// =============================================================================
// Config Builder
// =============================================================================

/// Builder for creating test configurations.
pub struct GlobalConfigBuilder {
    data_file: Option<String>,
    interactive: bool,
    id_pattern: String,
    log_level: Option<String>,
}

impl Default for GlobalConfigBuilder {
    fn default() -> Self {
        Self {
            data_file: None,
            interactive: false,
            id_pattern: "%T%RRR".to_string(),
            log_level: None,
        }
    }
}

impl GlobalConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data_file(mut self, path: impl Into<String>) -> Self {
        self.data_file = Some(path.into());
        self
    }

    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn id_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.id_pattern = pattern.into();
        self
    }

    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    pub fn build(&self) -> String {
        let mut lines = Vec::new();
        if let Some(ref path) = self.data_file {
            lines.push(format!("data_file = \"{path}\""));
        }
        lines.push(format!("interactive = {}", self.interactive));
        lines.push(format!("id_pattern = \"{}\"", self.id_pattern));
        if let Some(ref level) = self.log_level {
            lines.push(format!("log_level = \"{level}\""));
        }
        lines.join("\n")
    }
}

// =============================================================================
// Data File Fixtures
// =============================================================================

/// One record in the layout written before items had IDs: Russian kind
/// labels, no `id` field.
pub struct LegacyRecord<'a> {
    pub name: &'a str,
    pub region: &'a str,
    pub x: f64,
    pub y: f64,
    pub kind: &'a str,
    pub collected: bool,
    pub notes: &'a str,
}

/// Renders a legacy data file.
pub fn legacy_document(records: &[LegacyRecord<'_>]) -> String {
    let items: Vec<serde_json::Value> = records
        .iter()
        .map(|r| {
            serde_json::json!({
                "name": r.name,
                "region": r.region,
                "x": r.x,
                "y": r.y,
                "type": r.kind,
                "collected": r.collected,
                "date_added": "2024-05-01 18:30:00",
                "notes": r.notes,
            })
        })
        .collect();

    let document = serde_json::json!({
        "metadata": {
            "save_date": "2024-05-02 09:00:00",
            "total_items": records.len(),
        },
        "items": items,
    });
    serde_json::to_string_pretty(&document).expect("fixture should serialize")
}
