//! Text to bit string encoding.

use oxihuff_core::Symbol;
use oxihuff_core::bitstring::BitString;
use oxihuff_core::error::{HuffError, Result};
use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::table::CodeTable;

/// Encode `text` by concatenating the code of each character in order.
///
/// Fails with [`HuffError::MissingCode`] on a character the table has no
/// code for, which means the table was built from a different text.
///
/// # Example
///
/// ```
/// use oxihuff_huffman::{CodeTable, encode_text};
///
/// let table = CodeTable::from_pairs([('a', "1"), ('b', "0")]).unwrap();
/// assert_eq!(encode_text("aaab", &table).unwrap().as_str(), "1110");
/// ```
pub fn encode_text(text: &str, table: &CodeTable) -> Result<BitString> {
    let mut bits = BitString::with_capacity(text.len());
    for (position, symbol) in text.chars().enumerate() {
        let code = table
            .get(symbol)
            .ok_or_else(|| HuffError::missing_code(symbol, position))?;
        bits.push_code(code)?;
    }

    tracing::debug!(bits = bits.len(), "encoded text");
    Ok(bits)
}

/// Location of one character's code inside the encoded bit string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolSpan {
    /// The character.
    pub symbol: Symbol,
    /// Bit range of its code.
    pub bits: Range<usize>,
}

/// Bit ranges of the codes of the first `limit` characters of `text`.
///
/// Front ends use this to highlight where the leading characters landed in
/// the bit string.
pub fn symbol_spans(text: &str, table: &CodeTable, limit: usize) -> Result<Vec<SymbolSpan>> {
    let mut spans = Vec::new();
    let mut start = 0;
    for (position, symbol) in text.chars().take(limit).enumerate() {
        let code = table
            .get(symbol)
            .ok_or_else(|| HuffError::missing_code(symbol, position))?;
        let end = start + code.len();
        spans.push(SymbolSpan {
            symbol,
            bits: start..end,
        });
        start = end;
    }
    Ok(spans)
}
