//! Byte <-> variation selector mapping.
//!
//! Every byte value has exactly one selector:
//!
//! ```text
//! 0x00..=0x0F  ->  U+FE00..=U+FE0F    (VS1-VS16)
//! 0x10..=0xFF  ->  U+E0100..=U+E01EF  (VS17-VS256)
//! ```

use crate::error::{EncojiError, Result};
use std::ops::RangeInclusive;

/// Selectors for bytes 0-15
pub const RANGE_A: RangeInclusive<u32> = 0xFE00..=0xFE0F;

/// Selectors for bytes 16-255
pub const RANGE_B: RangeInclusive<u32> = 0xE0100..=0xE01EF;

const RANGE_A_START: u32 = 0xFE00;
const RANGE_B_START: u32 = 0xE0100;
const RANGE_A_LEN: u32 = 16;

/// Selector for each byte value, built at compile time
const SELECTORS: [char; 256] = build_table();

const fn build_table() -> [char; 256] {
    let mut table = ['\0'; 256];
    let mut b = 0u32;
    while b < 256 {
        let cp = if b < RANGE_A_LEN {
            RANGE_A_START + b
        } else {
            RANGE_B_START + (b - RANGE_A_LEN)
        };
        table[b as usize] = match char::from_u32(cp) {
            Some(c) => c,
            None => panic!("variation selector outside the scalar value range"),
        };
        b += 1;
    }
    table
}

/// Map a byte to its variation selector
#[inline]
pub fn to_selector(b: u8) -> char {
    SELECTORS[b as usize]
}

/// Map a variation selector back to its byte
///
/// Fails with [`EncojiError::NotAVariationSelector`] for any character
/// outside both ranges.
#[inline]
pub fn from_selector(c: char) -> Result<u8> {
    let cp = c as u32;
    if RANGE_A.contains(&cp) {
        Ok((cp - RANGE_A_START) as u8)
    } else if RANGE_B.contains(&cp) {
        Ok((cp - RANGE_B_START + RANGE_A_LEN) as u8)
    } else {
        Err(EncojiError::NotAVariationSelector(c))
    }
}

/// Whether `c` carries a byte
#[inline]
pub fn is_selector(c: char) -> bool {
    let cp = c as u32;
    RANGE_A.contains(&cp) || RANGE_B.contains(&cp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_low_bytes_use_range_a() {
        assert_eq!(to_selector(0x00), '\u{FE00}');
        assert_eq!(to_selector(0x05), '\u{FE05}');
        assert_eq!(to_selector(0x0F), '\u{FE0F}');
    }

    #[test]
    fn test_high_bytes_use_range_b() {
        assert_eq!(to_selector(0x10), '\u{E0100}');
        assert_eq!(to_selector(0x41), '\u{E0131}');
        assert_eq!(to_selector(0xFF), '\u{E01EF}');
    }

    #[test]
    fn test_every_byte_roundtrips() {
        for b in 0..=u8::MAX {
            assert_eq!(from_selector(to_selector(b)).unwrap(), b);
        }
    }

    #[test]
    fn test_mapping_is_injective() {
        let selectors: HashSet<char> = (0..=u8::MAX).map(to_selector).collect();
        assert_eq!(selectors.len(), 256);
    }

    #[test]
    fn test_ranges_are_disjoint_and_complete() {
        assert!(RANGE_A.end() < RANGE_B.start());
        assert_eq!(RANGE_A.clone().count() + RANGE_B.clone().count(), 256);

        for cp in RANGE_A.chain(RANGE_B) {
            let c = char::from_u32(cp).unwrap();
            assert!(is_selector(c));
            assert_eq!(to_selector(from_selector(c).unwrap()), c);
        }
    }

    #[test]
    fn test_range_edges() {
        for cp in [0xFDFF, 0xFE10, 0xE00FF, 0xE01F0] {
            let c = char::from_u32(cp).unwrap();
            assert!(!is_selector(c), "U+{:04X} should not be a selector", cp);
            assert!(from_selector(c).is_err());
        }
    }

    #[test]
    fn test_ordinary_characters_rejected() {
        for c in ['A', '\n', ' ', '😀', '\u{0}'] {
            match from_selector(c) {
                Err(EncojiError::NotAVariationSelector(found)) => assert_eq!(found, c),
                other => panic!("expected NotAVariationSelector, got {:?}", other),
            }
        }
    }
}
