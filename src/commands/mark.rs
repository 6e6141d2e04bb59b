//! # Mark Command
//!
//! Marks items as collected or not collected, and toggles status.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use super::{open_tracker, resolve_id, save_tracker};
use crate::{
    config::Config,
    item::{FilterCriteria, ItemId, StatusFilter},
    tracker::Tracker,
    ui::{self, InteractiveArgs},
};

/// Arguments for the mark command
#[derive(Debug, Clone, Default)]
pub struct MarkArgs {
    /// Item ID (partial match supported). Prompted for when absent.
    pub id: Option<String>,
    /// Mark as not collected instead
    pub undo: bool,
    /// Replacement notes
    pub notes: Option<String>,
    pub interactive: InteractiveArgs,
}

/// Executes the mark command.
pub fn execute(args: &MarkArgs, config: &Config) -> Result<()> {
    let mut tracker = open_tracker(config)?;
    let collected = !args.undo;

    let id = match args.id {
        Some(ref partial) => resolve_id(&tracker, partial)?,
        None => {
            if !args.interactive.should_run(config) {
                anyhow::bail!("No item given. Use --id <ID> or run in a terminal to pick one");
            }
            let Some(id) = pick_item(&tracker, collected)? else {
                return Ok(()); // User cancelled
            };
            id
        }
    };

    tracker.mark_collected(&id, collected, args.notes.as_deref())?;
    save_tracker(&mut tracker)?;

    let item = tracker
        .get(&id)
        .context("Item disappeared after marking")?;
    ui::print_success(if collected { "Collected" } else { "Uncollected" }, item);
    Ok(())
}

/// Offers the items whose status would change.
fn pick_item(tracker: &Tracker, collected: bool) -> Result<Option<ItemId>> {
    let criteria = FilterCriteria {
        status: if collected {
            StatusFilter::Missing
        } else {
            StatusFilter::Collected
        },
        ..FilterCriteria::new()
    };
    let candidates = tracker.filter(&criteria);

    if candidates.is_empty() {
        println!("{}", "No items to mark.".dimmed());
        return Ok(None);
    }

    let prompt = if collected {
        "Select an item to mark as collected"
    } else {
        "Select an item to mark as not collected"
    };
    Ok(ui::select_item(prompt, &candidates)?.map(|index| candidates[index].id.clone()))
}

/// Executes the toggle command.
pub fn execute_toggle(partial: &str, config: &Config) -> Result<()> {
    let mut tracker = open_tracker(config)?;
    let id = resolve_id(&tracker, partial)?;

    let collected = tracker.toggle(&id)?.collected;
    save_tracker(&mut tracker)?;

    if let Some(item) = tracker.get(&id) {
        ui::print_success(if collected { "Collected" } else { "Uncollected" }, item);
    }
    Ok(())
}
