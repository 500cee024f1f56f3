//! # OxiHuff Huffman
//!
//! Pure Rust Huffman coding of text.
//!
//! A text is analysed for symbol frequencies, a Huffman code is built with a
//! deterministic tie-break, each character is replaced by its code, and the
//! resulting bit string is packed four bits per hex digit.
//!
//! - [`frequency`]: Symbol counting
//! - [`tree`]: Huffman tree construction over a min-priority queue
//! - [`report`]: Per-symbol report (frequency, code, total bits)
//! - [`table`]: Validated symbol to code lookup
//! - [`encode`] / [`decode`]: Text to bits and back
//! - [`pipeline`]: The whole chain in one call
//!
//! ## Example
//!
//! ```rust
//! use oxihuff_huffman::compress_text;
//!
//! let c = compress_text("abracadabra").unwrap();
//!
//! for entry in &c.report {
//!     println!("{:?} x{} -> {} ({} bits)", entry.symbol, entry.frequency, entry.code, entry.total_bits);
//! }
//!
//! assert_eq!(c.bits.len(), 23);
//! assert_eq!(c.hex(), "69CF68");
//! assert_eq!(c.decompress().unwrap(), "abracadabra");
//! ```
//!
//! ## Single-symbol texts
//!
//! A text such as `"aaaa"` has one distinct symbol, so the tree never
//! merges. By default that symbol gets the code `"0"`; with
//! [`SingleSymbolCode::Empty`] it keeps the empty code and the text encodes
//! to no bits at all.
//!
//! ## Parallel Compression
//!
//! With the `parallel` feature, [`compress_many_parallel`] compresses
//! independent texts on the rayon thread pool.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
pub mod decode;
pub mod encode;
pub mod frequency;
pub mod pipeline;
pub mod report;
pub mod table;
pub mod tree;

// Re-exports
pub use config::{CodecConfig, SingleSymbolCode};
pub use decode::{DecodeTree, decode_bits};
pub use encode::{SymbolSpan, encode_text, symbol_spans};
pub use frequency::{FrequencyTable, count_frequencies, count_frequencies_with};
pub use pipeline::{Compression, compress_many, compress_text, compress_text_with, decompress_text};
pub use report::{HuffmanEntry, ReportSummary, assemble_report, total_bits};
pub use table::CodeTable;
pub use tree::{build_huffman_codes, build_huffman_codes_with};

#[cfg(feature = "parallel")]
pub use pipeline::compress_many_parallel;
