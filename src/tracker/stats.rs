//! # Statistics
//!
//! Collection progress totals.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use crate::item::{Item, Region};

/// Collection progress over a set of items
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Stats {
    pub total: usize,
    pub collected: usize,
    pub remaining: usize,
    /// Share of collected items, 0-100. Zero for an empty set.
    pub percentage: f64,
}

impl Stats {
    /// Computes progress over the given items.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a Item>) -> Self {
        let (total, collected) = items.into_iter().fold((0, 0), |(total, collected), item| {
            (total + 1, collected + usize::from(item.collected))
        });

        let percentage = if total == 0 {
            0.0
        } else {
            collected as f64 / total as f64 * 100.0
        };

        Self {
            total,
            collected,
            remaining: total - collected,
            percentage,
        }
    }

    /// True when every item is collected (and there is at least one).
    pub const fn is_complete(&self) -> bool {
        self.total > 0 && self.collected == self.total
    }
}

/// Progress within one region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionStats {
    pub region: Region,
    pub stats: Stats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{timestamp, ItemId, ItemKind};

    fn item(collected: bool) -> Item {
        Item {
            id: ItemId::from("A"),
            name: "A".to_string(),
            region: Region::Liyue,
            x: 0.0,
            y: 0.0,
            kind: ItemKind::Other,
            collected,
            date_added: timestamp::now(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_empty_is_zero_percent() {
        let stats = Stats::from_items(std::iter::empty());
        assert_eq!(stats.total, 0);
        assert!(stats.percentage.abs() < f64::EPSILON);
        assert!(!stats.is_complete());
    }

    #[test]
    fn test_percentage() {
        let items = [item(true), item(false), item(false), item(true)];
        let stats = Stats::from_items(&items);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.collected, 2);
        assert_eq!(stats.remaining, 2);
        assert!((stats.percentage - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_complete() {
        let items = [item(true)];
        assert!(Stats::from_items(&items).is_complete());
    }
}
