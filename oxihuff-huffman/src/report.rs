//! Code table report.
//!
//! The report lists, for every symbol, its frequency, its code, and the
//! number of bits it contributes to the encoded text. It keeps the order of
//! the code builder (code length, then symbol), which is the order front
//! ends display it in.

use oxihuff_core::Symbol;
use oxihuff_core::error::{HuffError, Result};
use oxihuff_core::hex::BITS_PER_DIGIT;
use serde::{Deserialize, Serialize};

use crate::frequency::FrequencyTable;

/// One row of the report.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HuffmanEntry {
    /// The symbol.
    pub symbol: Symbol,
    /// Occurrences of the symbol in the text.
    pub frequency: u64,
    /// Binary code of the symbol.
    pub code: String,
    /// `frequency * code.len()`.
    pub total_bits: u64,
}

impl HuffmanEntry {
    /// Create an entry, computing its total bits.
    pub fn new(symbol: Symbol, frequency: u64, code: impl Into<String>) -> Self {
        let code = code.into();
        let total_bits = frequency * code.len() as u64;
        Self {
            symbol,
            frequency,
            code,
            total_bits,
        }
    }

    /// Length of the code in bits.
    pub fn code_len(&self) -> usize {
        self.code.len()
    }
}

/// Combine `(symbol, code)` pairs with their frequencies.
///
/// The order of `codes` is preserved. A symbol missing from `freq` means the
/// codes were built from another text and fails with
/// [`HuffError::InvalidCodeTable`].
pub fn assemble_report(
    codes: &[(Symbol, String)],
    freq: &FrequencyTable,
) -> Result<Vec<HuffmanEntry>> {
    codes
        .iter()
        .map(|(symbol, code)| {
            if !freq.contains(*symbol) {
                return Err(HuffError::invalid_code_table(format!(
                    "symbol {symbol:?} has a code but no frequency"
                )));
            }
            Ok(HuffmanEntry::new(*symbol, freq.get(*symbol), code.as_str()))
        })
        .collect()
}

/// Total encoded length of the text described by `report`.
pub fn total_bits(report: &[HuffmanEntry]) -> u64 {
    report.iter().map(|e| e.total_bits).sum()
}

/// Size figures of one encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Number of symbols in the text.
    pub symbols: u64,
    /// Number of distinct symbols.
    pub distinct_symbols: usize,
    /// Size of the text in bytes (UTF-8).
    pub input_bytes: usize,
    /// Length of the encoded bit string.
    pub total_bits: u64,
    /// Number of hex digits after packing.
    pub hex_digits: u64,
    /// Packed size in whole bytes (two hex digits per byte).
    pub packed_bytes: u64,
}

impl ReportSummary {
    /// Summarize a report for a text of `input_bytes` bytes.
    pub fn new(report: &[HuffmanEntry], input_bytes: usize) -> Self {
        let total_bits = total_bits(report);
        let hex_digits = total_bits.div_ceil(BITS_PER_DIGIT as u64);
        Self {
            symbols: report.iter().map(|e| e.frequency).sum(),
            distinct_symbols: report.len(),
            input_bytes,
            total_bits,
            hex_digits,
            packed_bytes: hex_digits / 2,
        }
    }

    /// Average code length per symbol of the text.
    pub fn bits_per_symbol(&self) -> f64 {
        if self.symbols == 0 {
            0.0
        } else {
            self.total_bits as f64 / self.symbols as f64
        }
    }

    /// Encoded size relative to the input size.
    pub fn compression_ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            1.0
        } else {
            self.total_bits as f64 / (self.input_bytes as f64 * 8.0)
        }
    }

    /// Space savings as a percentage.
    pub fn space_savings(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            (1.0 - self.compression_ratio()) * 100.0
        }
    }
}
