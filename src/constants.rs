//! # Constants
//!
//! Centralized constants for magic values used throughout lootlist.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Item Rules
// =============================================================================

/// Two items closer than this on both axes (with matching name and region)
/// are considered the same item.
pub const DUPLICATE_TOLERANCE: f64 = 0.1;

/// Smallest coordinate accepted from user input.
pub const COORDINATE_MIN: f64 = -1000.0;

/// Largest coordinate accepted from user input.
pub const COORDINATE_MAX: f64 = 1000.0;

/// Timestamp format used for `date_added` and `save_date`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Attempts at drawing a fresh random ID before falling back to a suffix.
pub const ID_RETRY_LIMIT: usize = 16;

// =============================================================================
// UI Display
// =============================================================================

/// Maximum width for item names in tables (truncated with ellipsis).
pub const UI_NAME_TRUNCATE_LEN: usize = 32;

/// Maximum width for notes in tables (truncated with ellipsis).
pub const UI_NOTES_TRUNCATE_LEN: usize = 30;

/// Column width for ID in list display.
pub const UI_COL_ID_WIDTH: usize = 8;

/// Column width for region in list display.
pub const UI_COL_REGION_WIDTH: usize = 10;

/// Column width for kind in list display.
pub const UI_COL_KIND_WIDTH: usize = 8;

/// Status mark for collected items.
pub const MARK_COLLECTED: &str = "✓";

/// Status mark for items still to collect.
pub const MARK_MISSING: &str = "○";

// =============================================================================
// File System
// =============================================================================

/// Application directory name (inside config and data directories).
pub const APP_DIR: &str = "lootlist";

/// Global configuration file name (inside `~/.config/lootlist`).
pub const GLOBAL_CONFIG_FILENAME: &str = "config";

/// Default data file name (inside `~/.local/share/lootlist`).
pub const DEFAULT_DATA_FILENAME: &str = "items.json";

/// Extension appended to the data file while a save is in flight.
pub const TEMP_FILE_SUFFIX: &str = "tmp";

// =============================================================================
// Logging
// =============================================================================

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV_VAR: &str = "LOOTLIST_LOG";

/// Default log level when neither the environment nor config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
