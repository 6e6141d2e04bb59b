//! # Item Kinds
//!
//! What sort of collectible an item is.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::ParseError;

/// Kind of collectible.
///
/// Written lowercase to the data file. Parsing also accepts the Russian
/// labels found in older data files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ItemKind {
    Chest,
    Resource,
    Quest,
    Artifact,
    Weapon,
    #[default]
    Other,
}

impl ItemKind {
    /// All kinds in menu order.
    pub const ALL: [Self; 6] = [
        Self::Chest,
        Self::Resource,
        Self::Quest,
        Self::Artifact,
        Self::Weapon,
        Self::Other,
    ];

    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Chest => "Chest",
            Self::Resource => "Resource",
            Self::Quest => "Quest",
            Self::Artifact => "Artifact",
            Self::Weapon => "Weapon",
            Self::Other => "Other",
        }
    }

    const fn legacy_label(self) -> &'static str {
        match self {
            Self::Chest => "Сундук",
            Self::Resource => "Ресурс",
            Self::Quest => "Задание",
            Self::Artifact => "Артефакт",
            Self::Weapon => "Оружие",
            Self::Other => "Другое",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ItemKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| {
                kind.label().to_lowercase() == wanted || kind.legacy_label().to_lowercase() == wanted
            })
            .ok_or_else(|| ParseError::UnknownKind {
                value: s.to_string(),
                expected: Self::ALL.map(Self::label).join(", "),
            })
    }
}

impl TryFrom<String> for ItemKind {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
