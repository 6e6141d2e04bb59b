//! # Edit Command
//!
//! Updates fields of an existing item.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use owo_colors::OwoColorize;

use super::{open_tracker, resolve_id, save_tracker};
use crate::{
    config::Config,
    item::{ItemKind, Region},
    tracker::ItemUpdate,
    ui,
};

/// Arguments for the edit command
#[derive(Debug, Clone, Default)]
pub struct EditArgs {
    pub id: String,
    pub name: Option<String>,
    pub region: Option<Region>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub kind: Option<ItemKind>,
    pub notes: Option<String>,
    pub clear_notes: bool,
}

impl EditArgs {
    fn update(&self) -> ItemUpdate {
        ItemUpdate {
            name: self.name.clone(),
            region: self.region,
            x: self.x,
            y: self.y,
            kind: self.kind,
            notes: if self.clear_notes {
                Some(String::new())
            } else {
                self.notes.clone()
            },
            collected: None,
        }
    }
}

/// Executes the edit command.
pub fn execute(args: &EditArgs, config: &Config) -> Result<()> {
    let mut tracker = open_tracker(config)?;
    let id = resolve_id(&tracker, &args.id)?;

    let update = args.update();
    if update.is_empty() || !tracker.edit(&id, update)? {
        println!("{}", "No changes to apply.".dimmed());
        return Ok(());
    }

    save_tracker(&mut tracker)?;

    if let Some(item) = tracker.get(&id) {
        ui::print_success("Updated", item);
    }
    Ok(())
}
