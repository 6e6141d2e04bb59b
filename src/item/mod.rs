//! # Item
//!
//! A collectible tracked on the map: name, region, coordinates, kind,
//! collection status and notes.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod kind;
pub mod region;
pub mod search;
pub mod timestamp;

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use self::{
    kind::ItemKind,
    region::Region,
    search::{FilterCriteria, StatusFilter},
};
use crate::constants::{DUPLICATE_TOLERANCE, MARK_COLLECTED, MARK_MISSING};

/// Errors from parsing user-supplied region or kind names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown region '{value}' (expected one of: {expected})")]
    UnknownRegion { value: String, expected: String },

    #[error("unknown item type '{value}' (expected one of: {expected})")]
    UnknownKind { value: String, expected: String },
}

/// Stable item identifier, assigned when the item is created.
///
/// Empty for records read from files that predate identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Returns the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this record still needs an ID
    pub fn is_unassigned(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A tracked collectible
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Stable identifier
    #[serde(default)]
    pub id: ItemId,

    /// Display name
    pub name: String,

    /// Map region
    pub region: Region,

    /// Map X coordinate
    pub x: f64,

    /// Map Y coordinate
    pub y: f64,

    /// Kind of collectible
    #[serde(rename = "type", default)]
    pub kind: ItemKind,

    /// Whether the item has been picked up
    #[serde(default)]
    pub collected: bool,

    /// When the item was added (local time)
    #[serde(with = "timestamp")]
    pub date_added: NaiveDateTime,

    /// Free-form notes
    #[serde(default)]
    pub notes: String,
}

impl Item {
    /// Where and what this item is, for duplicate checks.
    pub fn placement(&self) -> Placement<'_> {
        Placement {
            name: &self.name,
            region: self.region,
            x: self.x,
            y: self.y,
        }
    }

    /// Status mark for tables
    pub const fn status_mark(&self) -> &'static str {
        if self.collected {
            MARK_COLLECTED
        } else {
            MARK_MISSING
        }
    }
}

impl AsRef<Self> for Item {
    fn as_ref(&self) -> &Self {
        self
    }
}

/// Name, region and coordinates of an item or a candidate item.
#[derive(Debug, Clone, Copy)]
pub struct Placement<'a> {
    pub name: &'a str,
    pub region: Region,
    pub x: f64,
    pub y: f64,
}

impl Placement<'_> {
    /// Proximity duplicate: same name (ignoring case), same region, and
    /// both coordinates closer than the duplicate tolerance.
    pub fn same_as(&self, other: &Placement<'_>) -> bool {
        self.region == other.region
            && self.name.to_lowercase() == other.name.to_lowercase()
            && (self.x - other.x).abs() < DUPLICATE_TOLERANCE
            && (self.y - other.y).abs() < DUPLICATE_TOLERANCE
    }
}
