// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Characteristic bit-string form of a subset code.
//!
//! Character `i` of the string is `'1'` iff ground-set item `i` is a member,
//! so the string reads in ground-set order (item 0 first). This is
//! information-equivalent to the integer code and is only used for
//! display and interchange.

use crate::encoding::subset_code::{SubsetCode, MAX_GROUND_SET};
use crate::error::{LatticeError, Result};

/// Render `code` as a characteristic string of length `ground_size`.
pub fn to_bit_string(code: SubsetCode, ground_size: usize) -> Result<String> {
    let code = code.check_range(ground_size)?;
    Ok((0..ground_size)
        .map(|i| if code.contains(i) { '1' } else { '0' })
        .collect())
}

/// Parse a characteristic string back into a code.
///
/// The ground-set size is the string's length.
pub fn from_bit_string(text: &str) -> Result<SubsetCode> {
    let malformed = || LatticeError::MalformedBitString {
        text: text.to_string(),
    };
    if text.len() > MAX_GROUND_SET {
        return Err(malformed());
    }
    let mut code = SubsetCode::empty();
    for (i, ch) in text.chars().enumerate() {
        match ch {
            '1' => code.insert(i),
            '0' => {}
            _ => return Err(malformed()),
        }
    }
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_zero_first() {
        let code = SubsetCode::from_bits(0b0011);
        assert_eq!(to_bit_string(code, 4).unwrap(), "1100");
        assert_eq!(to_bit_string(SubsetCode::empty(), 3).unwrap(), "000");
        assert_eq!(to_bit_string(SubsetCode::empty(), 0).unwrap(), "");
    }

    #[test]
    fn test_parse() {
        assert_eq!(from_bit_string("1100").unwrap().bits(), 0b0011);
        assert_eq!(from_bit_string("0001").unwrap().bits(), 0b1000);
        assert_eq!(from_bit_string("").unwrap(), SubsetCode::empty());
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(from_bit_string("10x1").is_err());
        assert!(from_bit_string(&"1".repeat(64)).is_err());
        assert!(to_bit_string(SubsetCode::from_bits(0b10000), 4).is_err());
    }

    #[test]
    fn test_string_and_code_agree() {
        for bits in 0..(1u64 << 7) {
            let code = SubsetCode::from_bits(bits);
            let text = to_bit_string(code, 7).unwrap();
            assert_eq!(text.len(), 7);
            assert_eq!(from_bit_string(&text).unwrap(), code);
        }
    }
}
