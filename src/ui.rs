//! # UI Utilities
//!
//! Shared user interface helpers: table rows, progress lines, success
//! messages and the interactive flag pattern used across commands.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::IsTerminal;

use anyhow::Result;
use owo_colors::OwoColorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::{
    config::Config,
    constants::{
        UI_COL_ID_WIDTH, UI_COL_KIND_WIDTH, UI_COL_REGION_WIDTH, UI_NAME_TRUNCATE_LEN,
        UI_NOTES_TRUNCATE_LEN,
    },
    item::{timestamp, Item},
    tracker::{RegionStats, Stats},
    tui::screens::select_from_list_with_header,
};

// =============================================================================
// Interactive Mode Resolution
// =============================================================================

/// Common interactive mode flags used across commands.
///
/// Consolidates the `--interactive` / `--no-interactive` flag pattern.
#[derive(Debug, Clone, Copy, Default)]
pub struct InteractiveArgs {
    /// Force interactive mode
    pub interactive: bool,
    /// Force non-interactive mode
    pub no_interactive: bool,
}

impl InteractiveArgs {
    /// Resolves interactive mode from flags and config.
    ///
    /// Priority: explicit `--interactive` > explicit `--no-interactive` > config default
    pub const fn resolve(&self, config_default: bool) -> bool {
        if self.interactive {
            true
        } else if self.no_interactive {
            false
        } else {
            config_default
        }
    }

    /// Checks if we should run interactive mode (combines flag resolution with terminal check).
    pub fn should_run(&self, config: &Config) -> bool {
        self.resolve(config.interactive()) && std::io::stdout().is_terminal()
    }
}

// =============================================================================
// Item Rows
// =============================================================================

/// Column header matching [`item_row`].
pub fn item_header() -> String {
    format!(
        "  {} {} {} {} {:>15}  {:<19}  Notes",
        pad("ID", UI_COL_ID_WIDTH),
        pad("Name", UI_NAME_TRUNCATE_LEN),
        pad("Region", UI_COL_REGION_WIDTH),
        pad("Kind", UI_COL_KIND_WIDTH),
        "X / Y",
        "Added",
    )
}

/// One table row: mark, ID, name, region, kind, coordinates, date, notes.
pub fn item_row(item: &Item) -> String {
    format!(
        "{} {} {} {} {} {:>15}  {}  {}",
        item.status_mark(),
        pad(item.id.as_str(), UI_COL_ID_WIDTH),
        pad(&truncate(&item.name, UI_NAME_TRUNCATE_LEN), UI_NAME_TRUNCATE_LEN),
        pad(item.region.name(), UI_COL_REGION_WIDTH),
        pad(item.kind.label(), UI_COL_KIND_WIDTH),
        format_coordinates(item.x, item.y),
        timestamp::format(&item.date_added),
        truncate(&item.notes, UI_NOTES_TRUNCATE_LEN),
    )
}

/// Formats a coordinate pair with one decimal.
pub fn format_coordinates(x: f64, y: f64) -> String {
    format!("{x:.1} / {y:.1}")
}

/// Prints items as a table, or a dimmed notice when there are none.
pub fn print_items<'a>(items: impl IntoIterator<Item = &'a Item>) {
    let mut items = items.into_iter().peekable();
    if items.peek().is_none() {
        println!("{}", "No items found.".dimmed());
        return;
    }

    println!("{}", item_header().dimmed());
    for item in items {
        println!("{}", item_row(item));
    }
}

/// Interactive selection for items - returns index.
///
/// Works with both `&[Item]` and `&[&Item]` via `AsRef<Item>`.
pub fn select_item<T: AsRef<Item>>(prompt: &str, items: &[T]) -> Result<Option<usize>> {
    let options: Vec<String> = items.iter().map(|item| item_row(item.as_ref())).collect();
    select_from_list_with_header(prompt, &item_header(), &options)
}

// =============================================================================
// Progress
// =============================================================================

/// Formats totals as `collected/total (pct%)`.
pub fn progress(stats: &Stats) -> String {
    format!(
        "{}/{} ({:.1}%)",
        stats.collected, stats.total, stats.percentage
    )
}

/// Prints the overall summary followed by the per-region breakdown.
pub fn print_stats(stats: &Stats, regions: &[RegionStats]) {
    println!("{}", "Statistics".bold());
    println!("  Total:     {}", stats.total);
    println!("  Collected: {}", stats.collected.green());
    println!("  Remaining: {}", stats.remaining.yellow());
    println!("  Progress:  {:.1}%", stats.percentage);

    if regions.is_empty() {
        return;
    }

    println!();
    println!("{}", "By region".bold());
    for entry in regions {
        println!(
            "  {} {}",
            pad(entry.region.name(), UI_COL_REGION_WIDTH),
            progress(&entry.stats)
        );
    }
}

// =============================================================================
// Success Messages
// =============================================================================

/// Prints a success message for an item.
///
/// Format: `✓ {verb} item: {id} {name}`
pub fn print_success(verb: &str, item: &Item) {
    println!("{} {} item: {} {}", "✓".green(), verb, item.id, item.name);
}

/// Prints warnings with yellow prefix.
pub fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        eprintln!("{} {}", "warning:".yellow(), warning);
    }
}

// =============================================================================
// String Utilities
// =============================================================================

/// Truncates a string to the given display width, adding ellipsis if truncated.
pub fn truncate(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

/// Left-aligns a string to the given display width.
pub fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(fill))
}
