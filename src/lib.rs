//! # lootlist
//!
//! A scriptable checklist tracker for collectible game items.
//!
//! Items (name, region, map coordinates, kind, collected flag, notes) live
//! in a single JSON file. The same record store backs the `loot` CLI, a
//! numbered text menu and a full-screen terminal browser.
//!
//! ## Features
//!
//! - **Duplicate Detection**: Same name and region within 0.1 map units is rejected
//! - **Stable IDs**: Customizable ID patterns with partial ID lookup
//! - **Progress**: Overall and per-region statistics
//! - **Plain JSON**: Readable, atomically written data file
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod commands;
pub mod config;
pub mod constants;
pub mod id;
pub mod item;
pub mod logging;
pub mod storage;
pub mod tracker;
pub mod tui;
pub mod ui;

pub use config::{set_home_override, Config};
pub use item::{FilterCriteria, Item, ItemId, ItemKind, Region, StatusFilter};
pub use tracker::{ItemUpdate, LoadStatus, NewItem, Stats, Tracker, TrackerError};
