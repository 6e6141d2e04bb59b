//! # Browse Command
//!
//! Opens the full-screen item browser.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::IsTerminal;

use anyhow::Result;
use owo_colors::OwoColorize;

use super::open_tracker;
use crate::{
    config::Config,
    tui::screens::{browse, BrowseExit},
};

/// Executes the browse command.
pub fn execute(config: &Config) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        anyhow::bail!("The browser needs a terminal. Use 'loot list' instead");
    }

    let mut tracker = open_tracker(config)?;

    match browse(&mut tracker)? {
        Some(BrowseExit::Saved) => {
            println!("{} Saved {}", "✓".green(), tracker.path().display());
        }
        Some(BrowseExit::Discarded) => println!("{}", "Changes discarded.".dimmed()),
        Some(BrowseExit::Clean) | None => {}
    }
    Ok(())
}
