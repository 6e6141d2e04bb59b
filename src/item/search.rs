//! # Search and Filter
//!
//! Item filtering logic. The single source of truth for filtering, used by
//! the store, the CLI and the terminal browser.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use super::{Item, ItemKind, Region};

// =============================================================================
// Filter Criteria
// =============================================================================

/// Collection status filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// Every item (default)
    #[default]
    All,
    /// Only collected items
    Collected,
    /// Only items still to collect
    Missing,
}

/// Unified filter criteria.
///
/// All fields are optional - empty/None means "match all".
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Region to filter by.
    pub region: Option<Region>,
    /// Collection status to filter by.
    pub status: StatusFilter,
    /// Kind to filter by.
    pub kind: Option<ItemKind>,
    /// Text search query (matches name and notes, case-insensitive).
    pub search: String,
}

impl FilterCriteria {
    /// Creates empty filter criteria (matches everything).
    pub fn new() -> Self {
        Self::default()
    }

    /// Criteria matching a single region.
    pub fn region(region: Region) -> Self {
        Self {
            region: Some(region),
            ..Self::default()
        }
    }
}

// =============================================================================
// Filter Matching
// =============================================================================

/// Checks if an item matches the filter criteria.
pub fn matches_filter(item: &Item, criteria: &FilterCriteria) -> bool {
    if criteria.region.is_some_and(|region| item.region != region) {
        return false;
    }

    if !matches_status(item.collected, criteria.status) {
        return false;
    }

    if criteria.kind.is_some_and(|kind| item.kind != kind) {
        return false;
    }

    criteria.search.is_empty() || matches_search_text(&item.name, &item.notes, &criteria.search)
}

/// Checks a collected flag against a status filter.
pub const fn matches_status(collected: bool, filter: StatusFilter) -> bool {
    match filter {
        StatusFilter::All => true,
        StatusFilter::Collected => collected,
        StatusFilter::Missing => !collected,
    }
}

/// Returns true if name or notes contain the query (case-insensitive).
pub fn matches_search_text(name: &str, notes: &str, query: &str) -> bool {
    let query = query.to_lowercase();
    name.to_lowercase().contains(&query) || notes.to_lowercase().contains(&query)
}
