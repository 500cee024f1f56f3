//! End-to-end compression of one text.
//!
//! ```text
//! text ─► count_frequencies ─► build_huffman_codes ─► assemble_report ─► report
//!                                                          │
//! text ─────────────────────────► encode_text ◄── CodeTable┘
//!                                      │
//!                                      ▼
//!                               BitString ─► PackedBits (hex)
//! ```
//!
//! Every call is independent: nothing is cached or shared between texts,
//! so separate texts can be compressed concurrently.

use oxihuff_core::bitstring::BitString;
use oxihuff_core::error::{HuffError, Result};
use oxihuff_core::hex::PackedBits;
use serde::{Deserialize, Serialize};

use crate::config::CodecConfig;
use crate::decode::decode_bits;
use crate::encode::encode_text;
use crate::frequency::{FrequencyTable, count_frequencies_with};
use crate::report::{HuffmanEntry, ReportSummary, assemble_report};
use crate::table::CodeTable;
use crate::tree::build_huffman_codes_with;

/// Every artifact of compressing one text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compression {
    /// Symbol occurrence counts.
    pub frequencies: FrequencyTable,
    /// Per-symbol code report, ordered by code length then symbol.
    pub report: Vec<HuffmanEntry>,
    /// The encoded text.
    pub bits: BitString,
    /// The encoded text packed into hex digits.
    pub packed: PackedBits,
    /// Size figures.
    pub summary: ReportSummary,
}

impl Compression {
    /// Hex digits of the packed text.
    pub fn hex(&self) -> &str {
        &self.packed.hex
    }

    /// Rebuild the code table from the report.
    pub fn code_table(&self) -> Result<CodeTable> {
        CodeTable::from_report(&self.report)
    }

    /// Check that the packed hex digits hold exactly [`Compression::bits`].
    ///
    /// Fails with [`HuffError::PackingMismatch`] when they differ, which can
    /// only happen to a document edited after compression.
    pub fn verify_packing(&self) -> Result<()> {
        if self.packed.unpack()? != self.bits {
            return Err(HuffError::packing_mismatch(self.bits.len()));
        }
        Ok(())
    }

    /// Recover the original text from the packed bits.
    ///
    /// The packing is verified first, so an inconsistent document is an
    /// error rather than a guess between its two bit encodings.
    pub fn decompress(&self) -> Result<String> {
        self.verify_packing()?;
        decompress_text(&self.packed, &self.code_table()?)
    }
}

/// Compress `text` with the default configuration.
///
/// # Example
///
/// ```
/// use oxihuff_huffman::compress_text;
///
/// let c = compress_text("aaab").unwrap();
/// assert_eq!(c.bits.as_str(), "1110");
/// assert_eq!(c.hex(), "E");
/// assert_eq!(c.decompress().unwrap(), "aaab");
/// ```
pub fn compress_text(text: &str) -> Result<Compression> {
    compress_text_with(text, &CodecConfig::DEFAULT)
}

/// Compress `text` under the given configuration.
pub fn compress_text_with(text: &str, config: &CodecConfig) -> Result<Compression> {
    let frequencies = count_frequencies_with(text, config)?;
    let codes = build_huffman_codes_with(&frequencies, config)?;
    let report = assemble_report(&codes, &frequencies)?;
    let table = CodeTable::from_report(&report)?;
    let bits = encode_text(text, &table)?;
    let packed = PackedBits::pack(&bits);
    let summary = ReportSummary::new(&report, text.len());

    tracing::debug!(
        symbols = summary.symbols,
        bits = summary.total_bits,
        hex_digits = summary.hex_digits,
        "compressed text"
    );

    Ok(Compression {
        frequencies,
        report,
        bits,
        packed,
        summary,
    })
}

/// Unpack and decode `packed` with `table`.
pub fn decompress_text(packed: &PackedBits, table: &CodeTable) -> Result<String> {
    let bits = packed.unpack()?;
    decode_bits(&bits, table)
}

/// Compress several independent texts, one result per text.
pub fn compress_many<S: AsRef<str>>(
    texts: &[S],
    config: &CodecConfig,
) -> Vec<Result<Compression>> {
    texts
        .iter()
        .map(|text| compress_text_with(text.as_ref(), config))
        .collect()
}

/// Compress several independent texts in parallel (requires `parallel` feature).
///
/// Results are in input order and identical to [`compress_many`].
#[cfg(feature = "parallel")]
pub fn compress_many_parallel<S: AsRef<str> + Sync>(
    texts: &[S],
    config: &CodecConfig,
) -> Vec<Result<Compression>> {
    use rayon::prelude::*;

    texts
        .par_iter()
        .map(|text| compress_text_with(text.as_ref(), config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SingleSymbolCode;

    #[test]
    fn test_aaab() {
        let c = compress_text("aaab").unwrap();
        assert_eq!(c.frequencies.get('a'), 3);
        assert_eq!(c.frequencies.get('b'), 1);
        assert_eq!(c.report[0], HuffmanEntry::new('a', 3, "1"));
        assert_eq!(c.report[1], HuffmanEntry::new('b', 1, "0"));
        assert_eq!(c.bits.as_str(), "1110");
        assert_eq!(c.hex(), "E");
        assert_eq!(c.packed.bit_len, 4);
    }

    #[test]
    fn test_hello_world() {
        let c = compress_text("hello world").unwrap();
        assert_eq!(c.bits.as_str(), "11111110101000110001100010101101");
        assert_eq!(c.hex(), "FEA318AD");
        assert_eq!(c.summary.packed_bytes, 4);
        assert_eq!(c.decompress().unwrap(), "hello world");
    }

    #[test]
    fn test_padding() {
        let c = compress_text("abracadabra").unwrap();
        assert_eq!(c.bits.as_str(), "01101001110011110110100");
        assert_eq!(c.hex(), "69CF68");
        assert_eq!(c.packed.padding(), 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(compress_text(""), Err(HuffError::EmptyInput)));
    }

    #[test]
    fn test_single_symbol_policies() {
        let c = compress_text("aaaa").unwrap();
        assert_eq!(c.bits.as_str(), "0000");
        assert_eq!(c.hex(), "0");
        assert_eq!(c.decompress().unwrap(), "aaaa");

        let config = CodecConfig::new().with_single_symbol(SingleSymbolCode::Empty);
        let c = compress_text_with("aaaa", &config).unwrap();
        assert!(c.bits.is_empty());
        assert_eq!(c.hex(), "");
        assert_eq!(c.summary.total_bits, 0);
        assert!(c.decompress().is_err());
    }

    #[test]
    fn test_decompress_rejects_mismatched_packing() {
        let mut c = compress_text("abracadabra").unwrap();
        assert!(c.verify_packing().is_ok());

        c.packed.hex = "69CF6A".to_string();
        assert!(matches!(
            c.verify_packing(),
            Err(HuffError::PackingMismatch { bit_len: 23 })
        ));
        assert!(matches!(
            c.decompress(),
            Err(HuffError::PackingMismatch { .. })
        ));
    }

    #[test]
    fn test_compress_many() {
        let results = compress_many(&["ab", "", "aaab"], &CodecConfig::DEFAULT);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(HuffError::EmptyInput)));
        assert_eq!(results[2].as_ref().map(|c| c.hex()).ok(), Some("E"));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_compress_many_parallel_matches_serial() {
        let texts: Vec<String> = (0..32).map(|i| "abcde".repeat(i + 1)).collect();
        let serial = compress_many(&texts, &CodecConfig::DEFAULT);
        let parallel = compress_many_parallel(&texts, &CodecConfig::DEFAULT);
        for (s, p) in serial.iter().zip(parallel.iter()) {
            assert_eq!(s.as_ref().ok(), p.as_ref().ok());
        }
    }
}
