//! # Tracker
//!
//! The record store: an insertion-ordered list of items with duplicate
//! detection, status updates, queries, statistics and JSON persistence.
//!
//! Every surface (CLI commands, the text menu, the terminal browser) goes
//! through this type. Records are addressed by their stable [`ItemId`].
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod error;
pub mod stats;

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use tracing::{debug, info, warn};

pub use self::{
    error::{Result, TrackerError},
    stats::{RegionStats, Stats},
};
use crate::{
    constants::ID_RETRY_LIMIT,
    id,
    item::{search, timestamp, FilterCriteria, Item, ItemId, ItemKind, Placement, Region},
    storage::{self, Metadata},
};

/// Fields for a new item
#[derive(Debug, Clone)]
pub struct NewItem {
    pub name: String,
    pub region: Region,
    pub x: f64,
    pub y: f64,
    pub kind: ItemKind,
}

/// Changes to apply to an existing item. `None` leaves a field as is.
#[derive(Debug, Clone, Default)]
pub struct ItemUpdate {
    pub name: Option<String>,
    pub region: Option<Region>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub kind: Option<ItemKind>,
    pub notes: Option<String>,
    pub collected: Option<bool>,
}

impl ItemUpdate {
    /// Returns true if the update touches no field.
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.region.is_none()
            && self.x.is_none()
            && self.y.is_none()
            && self.kind.is_none()
            && self.notes.is_none()
            && self.collected.is_none()
    }
}

/// What `load` found on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// The file was read; holds the number of items.
    Loaded(usize),
    /// No file yet; the store starts empty.
    Missing,
}

/// In-memory item store bound to a data file
#[derive(Debug)]
pub struct Tracker {
    path: PathBuf,
    items: Vec<Item>,
    id_pattern: String,
    dirty: bool,
}

impl Tracker {
    /// Creates an empty store for the given data file. Nothing is read.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            items: Vec::new(),
            id_pattern: id::DEFAULT_PATTERN.to_string(),
            dirty: false,
        }
    }

    /// Sets the pattern used for new item IDs.
    #[must_use]
    pub fn with_id_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.id_pattern = pattern.into();
        self
    }

    /// Creates a store and loads its data file.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let mut tracker = Self::new(path);
        tracker.load()?;
        Ok(tracker)
    }

    /// Path of the backing data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The known regions, in display order
    pub const fn regions(&self) -> &'static [Region] {
        &Region::ALL
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the store holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether there are changes since the last load or save
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Adds a new uncollected item.
    ///
    /// Rejected without touching the store if a proximity duplicate exists.
    pub fn add(&mut self, new: NewItem) -> Result<&Item> {
        let name = validate_name(&new.name)?;
        validate_coordinate('X', new.x)?;
        validate_coordinate('Y', new.y)?;

        let candidate = Placement {
            name: &name,
            region: new.region,
            x: new.x,
            y: new.y,
        };
        self.reject_duplicate(&candidate, None)?;

        let item = Item {
            id: self.fresh_id(),
            name,
            region: new.region,
            x: new.x,
            y: new.y,
            kind: new.kind,
            collected: false,
            date_added: timestamp::now(),
            notes: String::new(),
        };

        info!(id = %item.id, name = %item.name, region = %item.region, "added item");

        let index = self.items.len();
        self.items.push(item);
        self.dirty = true;
        Ok(&self.items[index])
    }

    /// Sets the collected flag. Notes are replaced only when given and non-empty.
    pub fn mark_collected(
        &mut self,
        id: &ItemId,
        collected: bool,
        notes: Option<&str>,
    ) -> Result<&Item> {
        let index = self.index_of(id)?;
        let item = &mut self.items[index];

        item.collected = collected;
        if let Some(notes) = notes.filter(|n| !n.is_empty()) {
            item.notes = notes.to_string();
        }

        debug!(id = %item.id, collected, "marked item");
        self.dirty = true;
        Ok(&self.items[index])
    }

    /// Flips the collected flag.
    pub fn toggle(&mut self, id: &ItemId) -> Result<&Item> {
        let index = self.index_of(id)?;
        let item = &mut self.items[index];
        item.collected = !item.collected;

        debug!(id = %item.id, collected = item.collected, "toggled item");
        self.dirty = true;
        Ok(&self.items[index])
    }

    /// Applies an update to an item.
    ///
    /// Returns `Ok(false)` if the update leaves the item unchanged. The update
    /// is rejected as a whole if it is invalid or would turn the item into a
    /// proximity duplicate of another one.
    pub fn edit(&mut self, id: &ItemId, update: ItemUpdate) -> Result<bool> {
        let index = self.index_of(id)?;
        let current = &self.items[index];

        let name = match update.name {
            Some(ref name) => validate_name(name)?,
            None => current.name.clone(),
        };
        let x = update.x.unwrap_or(current.x);
        let y = update.y.unwrap_or(current.y);
        validate_coordinate('X', x)?;
        validate_coordinate('Y', y)?;

        let edited = Item {
            id: current.id.clone(),
            name,
            region: update.region.unwrap_or(current.region),
            x,
            y,
            kind: update.kind.unwrap_or(current.kind),
            collected: update.collected.unwrap_or(current.collected),
            date_added: current.date_added,
            notes: update.notes.unwrap_or_else(|| current.notes.clone()),
        };

        if edited == *current {
            return Ok(false);
        }

        self.reject_duplicate(&edited.placement(), Some(index))?;

        debug!(id = %edited.id, "edited item");
        self.items[index] = edited;
        self.dirty = true;
        Ok(true)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// All items in insertion order
    pub fn list_all(&self) -> &[Item] {
        &self.items
    }

    /// Items in one region, in insertion order
    pub fn list_by_region(&self, region: Region) -> Vec<&Item> {
        self.filter(&FilterCriteria::region(region))
    }

    /// Items matching the criteria, in insertion order
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| search::matches_filter(item, criteria))
            .collect()
    }

    /// Looks up an item by its exact ID
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == *id)
    }

    /// Position of an item in insertion order
    pub fn position(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == *id)
    }

    /// ID of the item at a 0-based position
    pub fn id_at(&self, position: usize) -> Option<ItemId> {
        self.items.get(position).map(|item| item.id.clone())
    }

    /// Resolves a partial ID (case-insensitive prefix) to a full ID.
    ///
    /// An exact match wins even if it is also a prefix of other IDs.
    pub fn resolve(&self, partial: &str) -> Result<ItemId> {
        let wanted = partial.trim().to_uppercase();
        if wanted.is_empty() {
            return Err(TrackerError::NotFound(partial.to_string()));
        }

        if let Some(item) = self
            .items
            .iter()
            .find(|item| item.id.as_str().to_uppercase() == wanted)
        {
            return Ok(item.id.clone());
        }

        let matches: Vec<&Item> = self
            .items
            .iter()
            .filter(|item| item.id.as_str().to_uppercase().starts_with(&wanted))
            .collect();

        match matches.as_slice() {
            [] => Err(TrackerError::NotFound(partial.to_string())),
            [item] => Ok(item.id.clone()),
            many => Err(TrackerError::AmbiguousId {
                partial: partial.to_string(),
                candidates: many
                    .iter()
                    .map(|item| format!("{} {}", item.id, item.name))
                    .collect(),
            }),
        }
    }

    /// Progress across all items
    pub fn stats(&self) -> Stats {
        Stats::from_items(&self.items)
    }

    /// Progress per region, skipping regions without items
    pub fn region_stats(&self) -> Vec<RegionStats> {
        Region::ALL
            .into_iter()
            .map(|region| RegionStats {
                region,
                stats: Stats::from_items(self.items.iter().filter(|item| item.region == region)),
            })
            .filter(|entry| entry.stats.total > 0)
            .collect()
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Writes all items to the data file.
    pub fn save(&mut self) -> Result<Metadata> {
        let metadata = storage::write_document(&self.path, &self.items)?;
        self.dirty = false;
        info!(path = %self.path.display(), items = metadata.total_items, "saved tracker");
        Ok(metadata)
    }

    /// Replaces the in-memory items with the data file's contents.
    ///
    /// A missing file leaves the store empty and is not an error. On any
    /// failure the store is reset to empty. Records without an ID, or with
    /// an ID already taken, get a fresh one and the store is marked dirty.
    pub fn load(&mut self) -> Result<LoadStatus> {
        self.items.clear();
        self.dirty = false;

        let document = match storage::read_document(&self.path) {
            Ok(Some(document)) => document,
            Ok(None) => {
                info!(path = %self.path.display(), "no data file yet, starting empty");
                return Ok(LoadStatus::Missing);
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "failed to load data file");
                return Err(err.into());
            }
        };

        self.items = document.items;
        self.assign_missing_ids();

        info!(path = %self.path.display(), items = self.items.len(), "loaded tracker");
        Ok(LoadStatus::Loaded(self.items.len()))
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn index_of(&self, id: &ItemId) -> Result<usize> {
        self.position(id)
            .ok_or_else(|| TrackerError::NotFound(id.to_string()))
    }

    fn reject_duplicate(&self, candidate: &Placement<'_>, skip: Option<usize>) -> Result<()> {
        let existing = self
            .items
            .iter()
            .enumerate()
            .filter(|(index, _)| Some(*index) != skip)
            .map(|(_, item)| item)
            .find(|item| item.placement().same_as(candidate));

        match existing {
            Some(item) => {
                warn!(id = %item.id, name = %candidate.name, "rejected duplicate item");
                Err(TrackerError::Duplicate {
                    id: item.id.clone(),
                    name: item.name.clone(),
                    region: item.region,
                })
            }
            None => Ok(()),
        }
    }

    fn id_taken(&self, candidate: &str) -> bool {
        self.items
            .iter()
            .any(|item| item.id.as_str().eq_ignore_ascii_case(candidate))
    }

    /// Draws IDs from the pattern until one is free; after too many
    /// collisions, appends a counter instead.
    fn fresh_id(&self) -> ItemId {
        for _ in 0..ID_RETRY_LIMIT {
            let candidate = id::generate(&self.id_pattern);
            if !candidate.is_empty() && !self.id_taken(&candidate) {
                return ItemId::from(candidate);
            }
            debug!(%candidate, "item id collision, retrying");
        }

        let base = id::generate(&self.id_pattern);
        let base = if base.is_empty() { "ITEM".to_string() } else { base };
        (2..)
            .map(|n| format!("{base}-{n}"))
            .find(|candidate| !self.id_taken(candidate))
            .map_or_else(|| ItemId::from(base), ItemId::from)
    }

    fn assign_missing_ids(&mut self) {
        let mut seen = HashSet::new();
        for index in 0..self.items.len() {
            let key = self.items[index].id.as_str().to_uppercase();
            if key.is_empty() || !seen.insert(key) {
                let id = self.fresh_id();
                debug!(%id, name = %self.items[index].name, "assigned id to stored item");
                seen.insert(id.as_str().to_uppercase());
                self.items[index].id = id;
                self.dirty = true;
            }
        }
    }
}

fn validate_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(TrackerError::EmptyName);
    }
    Ok(name.to_string())
}

fn validate_coordinate(axis: char, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(TrackerError::InvalidCoordinate { axis })
    }
}
