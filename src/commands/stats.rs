//! # Stats Command
//!
//! Prints collection progress overall and per region.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use super::open_tracker;
use crate::{config::Config, ui};

/// Executes the stats command.
pub fn execute(config: &Config) -> Result<()> {
    let tracker = open_tracker(config)?;
    ui::print_stats(&tracker.stats(), &tracker.region_stats());
    Ok(())
}
