//! # Regions Command
//!
//! Lists every known region with its `collected/total` count.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use owo_colors::OwoColorize;

use super::open_tracker;
use crate::{config::Config, constants::UI_COL_REGION_WIDTH, tracker::Stats, ui};

/// Executes the regions command.
pub fn execute(config: &Config) -> Result<()> {
    let tracker = open_tracker(config)?;

    for region in tracker.regions() {
        let stats = Stats::from_items(tracker.list_by_region(*region));
        let line = format!(
            "{} {}/{}",
            ui::pad(region.name(), UI_COL_REGION_WIDTH),
            stats.collected,
            stats.total
        );
        if stats.is_complete() {
            println!("{}", line.green());
        } else if stats.total == 0 {
            println!("{}", line.dimmed());
        } else {
            println!("{line}");
        }
    }
    Ok(())
}
