//! # ID Generation
//!
//! Generates short item identifiers from a configurable pattern.
//! Default pattern: `%T%RR` (e.g. `0A2BK4`)
//!
//! ## Tokens
//! - `%y`, `%m`, `%d`: Year, Month, Day (2 digits)
//! - `%j`: Day of year (001-366)
//! - `%T`: Base32 time (4 chars, seconds since midnight UTC)
//! - `%R`: Base32 random (count of R determines length)
//! - `%%`: Literal percent sign
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod base32;

use std::fmt::Write;

use chrono::{DateTime, Datelike, Timelike, Utc};
use rand::Rng;

/// Default ID pattern: TTTTRR
pub const DEFAULT_PATTERN: &str = "%T%RR";

/// Generates an ID from the pattern using the current time.
pub fn generate(pattern: &str) -> String {
    generate_at(pattern, Utc::now())
}

/// Generates an ID from the pattern for a fixed instant.
pub fn generate_at(pattern: &str, now: DateTime<Utc>) -> String {
    let mut result = String::with_capacity(pattern.len() + 8);
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            result.push(c);
            continue;
        }

        match chars.next() {
            Some('y') => {
                let _ = write!(result, "{:02}", now.year() % 100);
            }
            Some('m') => {
                let _ = write!(result, "{:02}", now.month());
            }
            Some('d') => {
                let _ = write!(result, "{:02}", now.day());
            }
            Some('j') => {
                let _ = write!(result, "{:03}", now.ordinal());
            }
            Some('T') => {
                result.push_str(&base32::encode(
                    u64::from(now.num_seconds_from_midnight()),
                    4,
                ));
            }
            Some('R') => {
                let mut count = 1;
                while chars.peek() == Some(&'R') {
                    chars.next();
                    count += 1;
                }
                let mut rng = rand::rng();
                let bytes: Vec<u8> = (0..count).map(|_| rng.random()).collect();
                result.push_str(&base32::encode_bytes(&bytes));
            }
            Some('%') | None => result.push('%'),
            Some(other) => {
                // Unknown token, keep as-is
                result.push('%');
                result.push(other);
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn fixed() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 9, 0, 0, 32).unwrap()
    }

    #[test]
    fn test_default_pattern_length() {
        assert_eq!(generate(DEFAULT_PATTERN).len(), 6);
    }

    #[test]
    fn test_date_tokens() {
        assert_eq!(generate_at("%y%m%d", fixed()), "260109");
        assert_eq!(generate_at("%j", fixed()), "009");
    }

    #[test]
    fn test_time_token() {
        assert_eq!(generate_at("%T", fixed()), "0010");
    }

    #[test]
    fn test_random_length() {
        assert_eq!(generate("%R").len(), 1);
        assert_eq!(generate("%RRRR").len(), 4);
    }

    #[test]
    fn test_literals_and_escapes() {
        assert_eq!(generate_at("chest-%y", fixed()), "chest-26");
        assert_eq!(generate_at("100%%", fixed()), "100%");
        assert_eq!(generate_at("%q", fixed()), "%q");
    }
}
