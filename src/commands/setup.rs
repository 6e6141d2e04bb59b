//! # Setup Command
//!
//! One-time setup: writes the commented global config and reports where
//! items will be stored.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::{Config, GlobalConfig};

/// Executes the setup command.
pub fn execute(config: &Config) -> Result<()> {
    eprintln!("{}\n", "Setting up lootlist...".bold());

    let path = GlobalConfig::path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;

    if GlobalConfig::create_default_if_missing()? {
        eprintln!("{} Created global config: {}", "✓".green(), path.display());
    } else {
        eprintln!(
            "{} Global config already exists: {}",
            "✓".green(),
            path.display()
        );
    }

    eprintln!(
        "{} Items are stored in: {}",
        "✓".green(),
        config.data_path()?.display()
    );

    eprintln!(
        "\n  {} For shell completions, run: {}",
        "→".cyan(),
        "loot completions <SHELL>".dimmed()
    );

    Ok(())
}
