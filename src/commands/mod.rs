//! # Commands
//!
//! CLI command implementations for lootlist.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod add;
pub mod browse;
pub mod completions;
pub mod edit;
pub mod list;
pub mod mark;
pub mod menu;
pub mod regions;
pub mod setup;
pub mod stats;

use anyhow::{Context, Result};

pub use self::{
    add::{execute as add, AddArgs},
    browse::execute as browse,
    completions::execute as completions,
    edit::{execute as edit, EditArgs},
    list::{execute as list, ListArgs, SortBy},
    mark::{execute as mark, execute_toggle as toggle, MarkArgs},
    menu::{execute as menu, Menu},
    regions::execute as regions,
    setup::execute as setup,
    stats::execute as stats,
};
use crate::{
    config::Config,
    constants::{COORDINATE_MAX, COORDINATE_MIN},
    item::ItemId,
    tracker::Tracker,
    ui,
};

/// Opens the tracker at the configured data file.
///
/// Warns when stored items were given new IDs while loading.
pub fn open_tracker(config: &Config) -> Result<Tracker> {
    let path = config.data_path()?;
    let mut tracker = Tracker::new(&path).with_id_pattern(config.id_pattern());
    tracker
        .load()
        .with_context(|| format!("Failed to load items from {}", path.display()))?;

    if tracker.is_dirty() {
        ui::print_warnings(&[
            "Some stored items had no unique ID and were assigned one".to_string()
        ]);
    }
    Ok(tracker)
}

/// Saves the tracker, adding the data file to the error context.
pub fn save_tracker(tracker: &mut Tracker) -> Result<()> {
    tracker
        .save()
        .with_context(|| format!("Failed to save items to {}", tracker.path().display()))?;
    Ok(())
}

/// Resolves a partial ID given on the command line.
pub fn resolve_id(tracker: &Tracker, partial: &str) -> Result<ItemId> {
    Ok(tracker.resolve(partial)?)
}

/// Parses a map coordinate, accepting only finite values within the map bounds.
///
/// Used as a clap value parser and by the text menu.
pub fn parse_coordinate(value: &str) -> Result<f64, String> {
    let parsed: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;

    if !parsed.is_finite() || !(COORDINATE_MIN..=COORDINATE_MAX).contains(&parsed) {
        return Err(format!(
            "coordinate must be between {COORDINATE_MIN} and {COORDINATE_MAX}, got {value}"
        ));
    }
    Ok(parsed)
}
