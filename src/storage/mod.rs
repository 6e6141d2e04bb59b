//! # Storage
//!
//! JSON persistence for the tracker: the on-disk document layout and
//! crash-safe writes.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    ffi::OsString,
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    constants::TEMP_FILE_SUFFIX,
    item::{timestamp, Item},
};

/// Storage failures, always tagged with the file involved.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed data file {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },

    #[error("Failed to serialize items")]
    Serialize(#[source] serde_json::Error),
}

/// File-level metadata written alongside the items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// When the file was written (local time)
    pub save_date: String,

    /// Number of items in the file
    pub total_items: usize,
}

/// A data file as read from disk.
#[derive(Debug, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub metadata: Option<Metadata>,

    pub items: Vec<Item>,
}

/// Borrowed view used when writing, so saving never clones the item list.
#[derive(Serialize)]
struct DocumentRef<'a> {
    metadata: &'a Metadata,
    items: &'a [Item],
}

/// Reads a data file.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn read_document(path: &Path) -> Result<Option<Document>, StorageError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StorageError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_str(&content)
        .map(Some)
        .map_err(|err| StorageError::Malformed {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })
}

/// Writes items to a data file, creating parent directories as needed.
///
/// The document is written to a sibling temp file first and renamed over
/// the target, so a crash mid-write leaves the previous file intact.
pub fn write_document(path: &Path, items: &[Item]) -> Result<Metadata, StorageError> {
    let metadata = Metadata {
        save_date: timestamp::format(&timestamp::now()),
        total_items: items.len(),
    };

    let mut content = serde_json::to_string_pretty(&DocumentRef {
        metadata: &metadata,
        items,
    })
    .map_err(StorageError::Serialize)?;
    content.push('\n');

    let write_err = |source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let temp = temp_path(path);
    fs::write(&temp, content).map_err(write_err)?;
    fs::rename(&temp, path).map_err(|source| {
        let _ = fs::remove_file(&temp);
        write_err(source)
    })?;

    Ok(metadata)
}

/// Sibling path used while a save is in flight: `items.json` -> `items.json.tmp`.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map_or_else(OsString::new, ToOwned::to_owned);
    name.push(".");
    name.push(TEMP_FILE_SUFFIX);
    path.with_file_name(name)
}
