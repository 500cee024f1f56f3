//! Hexadecimal bit packing.
//!
//! Bit strings are packed four bits per hex digit, most significant bit
//! first. When the bit count is not a multiple of four the string is padded
//! with zero bits at the end before packing:
//!
//! ```text
//! bits:    1 1 0 1 0 1
//! padded:  1 1 0 1 0 1 0 0
//! groups:  1101 0100
//! hex:     D    4
//! ```
//!
//! The hex digits alone do not record how many padding bits were added.
//! [`PackedBits`] pairs the digits with the original bit length so the
//! exact bit string can be restored.

use crate::bitstring::{BitString, validate_bits};
use crate::error::{HuffError, Result};
use serde::{Deserialize, Serialize};

/// Bits per hex digit.
pub const BITS_PER_DIGIT: usize = 4;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Number of zero bits appended to `bit_len` bits to reach a digit boundary.
pub fn padding_bits(bit_len: usize) -> usize {
    (BITS_PER_DIGIT - bit_len % BITS_PER_DIGIT) % BITS_PER_DIGIT
}

/// Number of hex digits needed for `bit_len` bits.
pub fn hex_len(bit_len: usize) -> usize {
    bit_len.div_ceil(BITS_PER_DIGIT)
}

/// Pack a string of binary digits into uppercase hexadecimal.
///
/// Fails with [`HuffError::InvalidBit`] on any character other than `'0'`
/// or `'1'`. An empty bit string packs to an empty hex string.
///
/// # Example
///
/// ```
/// use oxihuff_core::bits_to_hex;
///
/// assert_eq!(bits_to_hex("0001").unwrap(), "1");
/// assert_eq!(bits_to_hex("110101").unwrap(), "D4");
/// ```
pub fn bits_to_hex(bits: &str) -> Result<String> {
    validate_bits(bits)?;
    Ok(pack_digits(bits.as_bytes()))
}

fn pack_digits(bits: &[u8]) -> String {
    let mut hex = String::with_capacity(hex_len(bits.len()));
    for group in bits.chunks(BITS_PER_DIGIT) {
        // Short final group: missing low bits are the zero padding
        let mut nibble = 0usize;
        for i in 0..BITS_PER_DIGIT {
            nibble <<= 1;
            if group.get(i) == Some(&b'1') {
                nibble |= 1;
            }
        }
        hex.push(HEX_DIGITS[nibble] as char);
    }
    hex
}

/// Unpack hex digits back into exactly `bit_len` bits.
///
/// Accepts upper- and lowercase digits. `bit_len` must satisfy
/// `ceil(bit_len / 4) == hex.len()`, i.e. it may only drop padding bits;
/// anything else fails with [`HuffError::BitLengthOutOfRange`].
pub fn hex_to_bits(hex: &str, bit_len: usize) -> Result<BitString> {
    let digits = hex.chars().count();
    let capacity = digits * BITS_PER_DIGIT;
    if hex_len(bit_len) != digits {
        return Err(HuffError::bit_length_out_of_range(bit_len, capacity));
    }

    let mut bits = BitString::with_capacity(capacity);
    for (position, c) in hex.chars().enumerate() {
        let nibble = c
            .to_digit(16)
            .ok_or_else(|| HuffError::invalid_hex_digit(position, c))?;
        for shift in (0..BITS_PER_DIGIT).rev() {
            if bits.len() == bit_len {
                break;
            }
            bits.push_bit((nibble >> shift) & 1 == 1);
        }
    }
    Ok(bits)
}

/// Hex digits together with the bit length they were packed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackedBits {
    /// Uppercase hex digits.
    pub hex: String,
    /// Number of meaningful bits (excluding padding).
    pub bit_len: usize,
}

impl PackedBits {
    /// Pack a bit string.
    pub fn pack(bits: &BitString) -> Self {
        Self {
            hex: pack_digits(bits.as_str().as_bytes()),
            bit_len: bits.len(),
        }
    }

    /// Restore the original bit string.
    pub fn unpack(&self) -> Result<BitString> {
        hex_to_bits(&self.hex, self.bit_len)
    }

    /// Number of zero bits appended during packing.
    pub fn padding(&self) -> usize {
        padding_bits(self.bit_len)
    }

    /// Packed size in whole bytes (two hex digits per byte, rounded down).
    pub fn byte_len(&self) -> usize {
        self.hex.len() / 2
    }
}
