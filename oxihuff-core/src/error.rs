//! Error types for OxiHuff operations.
//!
//! A single error enum covers every failure of the codec pipeline: empty
//! input, malformed bit or hex strings, incomplete or inconsistent code
//! tables, and I/O errors from the front ends that read text from files.

use crate::Symbol;
use std::io;
use thiserror::Error;

/// The main error type for OxiHuff operations.
#[derive(Debug, Error)]
pub enum HuffError {
    /// I/O error from an underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The text (or frequency table) has no symbols, so there is no tree to build.
    #[error("input text is empty")]
    EmptyInput,

    /// A bit string contained something other than '0' or '1'.
    #[error("Invalid bit {found:?} at position {position}")]
    InvalidBit {
        /// Character index of the offending character.
        position: usize,
        /// The character found.
        found: char,
    },

    /// A hex string contained a non-hexadecimal character.
    #[error("Invalid hex digit {found:?} at position {position}")]
    InvalidHexDigit {
        /// Character index of the offending character.
        position: usize,
        /// The character found.
        found: char,
    },

    /// The declared bit length does not fit the packed hex digits.
    #[error("Bit length {bit_len} does not match {capacity} packed bits")]
    BitLengthOutOfRange {
        /// Declared bit length.
        bit_len: usize,
        /// Number of bits held by the hex digits (4 per digit).
        capacity: usize,
    },

    /// A symbol of the text has no code in the code table.
    #[error("No code for symbol {symbol:?} at position {position}")]
    MissingCode {
        /// The symbol without a code.
        symbol: Symbol,
        /// Character index of the symbol in the text.
        position: usize,
    },

    /// A symbol outside the ASCII range was rejected.
    #[error("Non-ASCII symbol {symbol:?} at position {position}")]
    NonAsciiSymbol {
        /// The rejected symbol.
        symbol: Symbol,
        /// Character index of the symbol in the text.
        position: usize,
    },

    /// A frequency table listed a symbol that never occurs.
    #[error("Symbol {symbol:?} has a zero count")]
    ZeroFrequency {
        /// The symbol with a zero count.
        symbol: Symbol,
    },

    /// A stored bit string and its packed hex digits describe different bits.
    #[error("Packed hex digits do not match the {bit_len}-bit string")]
    PackingMismatch {
        /// Length of the stored bit string.
        bit_len: usize,
    },

    /// The code table is not a valid prefix code.
    #[error("Invalid code table: {message}")]
    InvalidCodeTable {
        /// Description of the problem.
        message: String,
    },

    /// The bit string does not decode with the given code table.
    #[error("Invalid code at bit position {bit_position}")]
    InvalidCode {
        /// Bit position where the code that failed to decode started.
        bit_position: usize,
    },
}

/// Result type alias for OxiHuff operations.
pub type Result<T> = std::result::Result<T, HuffError>;

impl HuffError {
    /// Create an invalid bit error.
    pub fn invalid_bit(position: usize, found: char) -> Self {
        Self::InvalidBit { position, found }
    }

    /// Create an invalid hex digit error.
    pub fn invalid_hex_digit(position: usize, found: char) -> Self {
        Self::InvalidHexDigit { position, found }
    }

    /// Create a bit length error.
    pub fn bit_length_out_of_range(bit_len: usize, capacity: usize) -> Self {
        Self::BitLengthOutOfRange { bit_len, capacity }
    }

    /// Create a missing code error.
    pub fn missing_code(symbol: Symbol, position: usize) -> Self {
        Self::MissingCode { symbol, position }
    }

    /// Create a non-ASCII symbol error.
    pub fn non_ascii(symbol: Symbol, position: usize) -> Self {
        Self::NonAsciiSymbol { symbol, position }
    }

    /// Create a zero frequency error.
    pub fn zero_frequency(symbol: Symbol) -> Self {
        Self::ZeroFrequency { symbol }
    }

    /// Create a packing mismatch error.
    pub fn packing_mismatch(bit_len: usize) -> Self {
        Self::PackingMismatch { bit_len }
    }

    /// Create an invalid code table error.
    pub fn invalid_code_table(message: impl Into<String>) -> Self {
        Self::InvalidCodeTable {
            message: message.into(),
        }
    }

    /// Create an invalid code error.
    pub fn invalid_code(bit_position: usize) -> Self {
        Self::InvalidCode { bit_position }
    }

    /// Whether this error reports bad user input rather than a broken
    /// internal invariant.
    ///
    /// Only empty and non-ASCII text can come from a user typing into a
    /// front end; everything else means a caller handed the codec
    /// artifacts that were not produced from the same text.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::EmptyInput | Self::NonAsciiSymbol { .. })
    }
}
