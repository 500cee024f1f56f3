//! # OxiHuff Core
//!
//! Core components for the OxiHuff text codec.
//!
//! This crate provides the building blocks shared by the codec and its
//! front ends:
//!
//! - [`bitstring`]: Validated strings of binary digits
//! - [`hex`]: Packing bit strings into hex digits (and back)
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! OxiHuff is designed as a small layered stack:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L4: Front end                                           │
//! │     CLI (report table, highlighted bits, JSON)          │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec                                               │
//! │     Frequencies, Huffman tree, code table, encoder      │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: Bits (this crate)                                   │
//! │     BitString, hex packing, errors                      │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxihuff_core::{BitString, PackedBits, bits_to_hex};
//!
//! let bits = BitString::parse("110101").unwrap();
//! assert_eq!(bits_to_hex(bits.as_str()).unwrap(), "D4");
//!
//! let packed = PackedBits::pack(&bits);
//! assert_eq!(packed.unpack().unwrap(), bits);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitstring;
pub mod error;
pub mod hex;

/// An atomic unit of input text: one Unicode scalar value.
pub type Symbol = char;

// Re-exports for convenience
pub use bitstring::{BitString, validate_bits};
pub use error::{HuffError, Result};
pub use hex::{PackedBits, bits_to_hex, hex_len, hex_to_bits, padding_bits};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::Symbol;
    pub use crate::bitstring::BitString;
    pub use crate::error::{HuffError, Result};
    pub use crate::hex::{PackedBits, bits_to_hex, hex_to_bits};
}
