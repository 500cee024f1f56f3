//! Textual bit strings.
//!
//! A [`BitString`] is an ordered sequence of `'0'`/`'1'` characters. It is
//! the human-readable form of the encoded text: the encoder appends one
//! code per input symbol and the packer turns the result into hex digits.
//!
//! # Example
//!
//! ```
//! use oxihuff_core::BitString;
//!
//! let mut bits = BitString::new();
//! bits.push_code("10").unwrap();
//! bits.push_code("0").unwrap();
//! assert_eq!(bits.as_str(), "100");
//! assert_eq!(bits.len(), 3);
//!
//! assert!(BitString::parse("10x").is_err());
//! ```

use crate::error::{HuffError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Check that every character of `bits` is `'0'` or `'1'`.
pub fn validate_bits(bits: &str) -> Result<()> {
    match bits.chars().enumerate().find(|&(_, c)| c != '0' && c != '1') {
        Some((position, found)) => Err(HuffError::invalid_bit(position, found)),
        None => Ok(()),
    }
}

/// An owned, validated string of binary digits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BitString(String);

impl BitString {
    /// Create an empty bit string.
    pub fn new() -> Self {
        Self(String::new())
    }

    /// Create an empty bit string with room for `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self(String::with_capacity(bits))
    }

    /// Validate and wrap a string of binary digits.
    pub fn parse(bits: impl Into<String>) -> Result<Self> {
        let bits = bits.into();
        validate_bits(&bits)?;
        Ok(Self(bits))
    }

    /// Append a code (itself a string of binary digits).
    pub fn push_code(&mut self, code: &str) -> Result<()> {
        if let Err(HuffError::InvalidBit { position, found }) = validate_bits(code) {
            return Err(HuffError::invalid_bit(self.0.len() + position, found));
        }
        self.0.push_str(code);
        Ok(())
    }

    /// Append a single bit.
    pub fn push_bit(&mut self, bit: bool) {
        self.0.push(if bit { '1' } else { '0' });
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the bit string holds no bits.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the bit at `index`, if any.
    pub fn get(&self, index: usize) -> Option<bool> {
        self.0.as_bytes().get(index).map(|&b| b == b'1')
    }

    /// Iterate over the bits in order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.bytes().map(|b| b == b'1')
    }

    /// Borrow the bits as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the bit string, returning the underlying `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BitString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for BitString {
    type Error = HuffError;

    fn try_from(bits: String) -> Result<Self> {
        Self::parse(bits)
    }
}

impl From<BitString> for String {
    fn from(bits: BitString) -> Self {
        bits.0
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut bits = Self::new();
        for bit in iter {
            bits.push_bit(bit);
        }
        bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let bits = BitString::parse("0110").unwrap();
        assert_eq!(bits.len(), 4);
        assert_eq!(bits.get(0), Some(false));
        assert_eq!(bits.get(1), Some(true));
        assert_eq!(bits.get(4), None);
    }

    #[test]
    fn test_parse_rejects_other_chars() {
        let err = BitString::parse("01 1").unwrap_err();
        assert!(matches!(
            err,
            HuffError::InvalidBit {
                position: 2,
                found: ' '
            }
        ));
    }

    #[test]
    fn test_push_code_reports_absolute_position() {
        let mut bits = BitString::parse("000").unwrap();
        let err = bits.push_code("1a").unwrap_err();
        assert!(matches!(
            err,
            HuffError::InvalidBit {
                position: 4,
                found: 'a'
            }
        ));
        // Nothing appended on failure
        assert_eq!(bits.as_str(), "000");
    }

    #[test]
    fn test_from_iter() {
        let bits: BitString = [true, false, true].into_iter().collect();
        assert_eq!(bits.as_str(), "101");
        assert_eq!(bits.iter().collect::<Vec<_>>(), vec![true, false, true]);
    }

    #[test]
    fn test_empty() {
        let bits = BitString::new();
        assert!(bits.is_empty());
        assert_eq!(bits.to_string(), "");
    }
}
