//! # Add Command
//!
//! Adds a new item and saves the data file.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use super::{open_tracker, save_tracker};
use crate::{
    config::Config,
    item::{ItemKind, Region},
    tracker::{ItemUpdate, NewItem},
    ui,
};

/// Arguments for the add command
pub struct AddArgs {
    pub name: String,
    pub region: Region,
    pub x: f64,
    pub y: f64,
    pub kind: ItemKind,
    pub notes: Option<String>,
}

/// Executes the add command.
pub fn execute(args: AddArgs, config: &Config) -> Result<()> {
    let mut tracker = open_tracker(config)?;

    let id = tracker
        .add(NewItem {
            name: args.name,
            region: args.region,
            x: args.x,
            y: args.y,
            kind: args.kind,
        })?
        .id
        .clone();

    if let Some(notes) = args.notes.filter(|n| !n.trim().is_empty()) {
        tracker.edit(
            &id,
            ItemUpdate {
                notes: Some(notes),
                ..ItemUpdate::default()
            },
        )?;
    }

    save_tracker(&mut tracker)?;

    if let Some(item) = tracker.get(&id) {
        ui::print_success("Added", item);
    }
    Ok(())
}
