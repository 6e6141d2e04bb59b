//! # Base32 Encoding
//!
//! Crockford's Base32 encoding for short, readable item IDs.
//! Uses alphabet: 0-9, A-Z excluding I, L, O, U (32 characters).
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

/// Crockford's Base32 alphabet (excludes I, L, O, U for readability)
const CROCKFORD_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Encodes a value into a fixed-width Crockford Base32 string,
/// left-padded with '0'. Higher digits beyond `width` are dropped.
pub fn encode(mut value: u64, width: usize) -> String {
    let mut digits = vec![b'0'; width];

    for slot in digits.iter_mut().rev() {
        *slot = CROCKFORD_ALPHABET[(value % 32) as usize];
        value /= 32;
    }

    digits.into_iter().map(char::from).collect()
}

/// Maps each random byte onto one Base32 character.
pub fn encode_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| char::from(CROCKFORD_ALPHABET[usize::from(*byte) % 32]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_zero() {
        assert_eq!(encode(0, 4), "0000");
    }

    #[test]
    fn test_encode_width() {
        assert_eq!(encode(1, 1), "1");
        assert_eq!(encode(1, 4), "0001");
        assert_eq!(encode(32, 4), "0010");
    }

    #[test]
    fn test_encode_seconds_of_day_fit() {
        // 23:59:59
        assert_eq!(encode(86_399, 4).len(), 4);
    }

    #[test]
    fn test_alphabet_excludes_confusing_chars() {
        let alphabet = String::from_utf8_lossy(CROCKFORD_ALPHABET);
        for c in ['I', 'L', 'O', 'U'] {
            assert!(!alphabet.contains(c));
        }
    }

    #[test]
    fn test_encode_bytes() {
        assert_eq!(encode_bytes(&[0, 1, 31, 32]), "01Z0");
        assert_eq!(encode_bytes(&[]), "");
    }
}
