//! # Tracker Errors
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use thiserror::Error;

use crate::{
    item::{ItemId, Region},
    storage::StorageError,
};

/// Everything a store operation can refuse or fail with.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("A similar item already exists: '{name}' in {region} (id {id})")]
    Duplicate {
        id: ItemId,
        name: String,
        region: Region,
    },

    #[error("No item found matching '{0}'")]
    NotFound(String),

    #[error("Multiple items match '{partial}':\n  {}", candidates.join("\n  "))]
    AmbiguousId {
        partial: String,
        candidates: Vec<String>,
    },

    #[error("Item name cannot be empty")]
    EmptyName,

    #[error("Coordinate {axis} must be a finite number")]
    InvalidCoordinate { axis: char },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl TrackerError {
    /// Whether the data file exists but could not be understood.
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::Storage(StorageError::Malformed { .. }))
    }
}

/// Result alias for store operations
pub type Result<T, E = TrackerError> = std::result::Result<T, E>;
