//! # Regions
//!
//! The fixed set of map regions items can belong to.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::ParseError;

/// A named map area, used as the grouping and filter key for items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Region {
    Mondstadt,
    Liyue,
    Inazuma,
    Sumeru,
    Fontaine,
    Natlan,
    Snezhnaya,
}

impl Region {
    /// All regions in display order.
    pub const ALL: [Self; 7] = [
        Self::Mondstadt,
        Self::Liyue,
        Self::Inazuma,
        Self::Sumeru,
        Self::Fontaine,
        Self::Natlan,
        Self::Snezhnaya,
    ];

    /// Canonical name, as written to the data file.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mondstadt => "Mondstadt",
            Self::Liyue => "Liyue",
            Self::Inazuma => "Inazuma",
            Self::Sumeru => "Sumeru",
            Self::Fontaine => "Fontaine",
            Self::Natlan => "Natlan",
            Self::Snezhnaya => "Snezhnaya",
        }
    }

    fn expected() -> String {
        Self::ALL.map(Self::name).join(", ")
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Region {
    type Err = ParseError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|region| region.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseError::UnknownRegion {
                value: s.to_string(),
                expected: Self::expected(),
            })
    }
}

impl TryFrom<String> for Region {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
