//! # List Command
//!
//! Lists items with filtering and sorting options.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use super::open_tracker;
use crate::{
    config::Config,
    item::{FilterCriteria, Item, ItemKind, Region, StatusFilter},
    ui,
};

/// Sort order for listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SortBy {
    /// Oldest first
    #[default]
    Added,
    /// Alphabetical, ignoring case
    Name,
    /// Region order, then oldest first
    Region,
}

/// Filter and sort options for listing
#[derive(Debug, Clone, Default)]
pub struct ListArgs {
    pub region: Option<Region>,
    pub status: StatusFilter,
    pub kind: Option<ItemKind>,
    pub search: Option<String>,
    pub sort: SortBy,
}

impl ListArgs {
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            region: self.region,
            status: self.status,
            kind: self.kind,
            search: self.search.clone().unwrap_or_default(),
        }
    }
}

/// Sorts items in place by the given sort order. Ties keep insertion order.
pub fn sort_items(items: &mut [&Item], sort: SortBy) {
    match sort {
        SortBy::Added => items.sort_by_key(|item| item.date_added),
        SortBy::Name => items.sort_by_cached_key(|item| item.name.to_lowercase()),
        SortBy::Region => items.sort_by_key(|item| (item.region, item.date_added)),
    }
}

/// Executes the list command.
pub fn execute(args: &ListArgs, config: &Config) -> Result<()> {
    let tracker = open_tracker(config)?;

    let mut items = tracker.filter(&args.criteria());
    sort_items(&mut items, args.sort);
    ui::print_items(items);

    Ok(())
}
