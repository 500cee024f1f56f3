//! Symbol frequency analysis.

use oxihuff_core::Symbol;
use oxihuff_core::error::{HuffError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, btree_map};

use crate::config::CodecConfig;

/// Occurrence count of every distinct symbol of a text.
///
/// Keys are unique and counts are positive. Iteration is in ascending
/// symbol order, so everything derived from the table is reproducible.
///
/// It serializes as a map from symbol to count. Deserializing a map with a
/// zero count fails with [`HuffError::ZeroFrequency`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<Symbol, u64>",
    into = "BTreeMap<Symbol, u64>"
)]
pub struct FrequencyTable {
    counts: BTreeMap<Symbol, u64>,
}

impl FrequencyTable {
    /// Build a table from `(symbol, count)` pairs.
    ///
    /// Counts for repeated symbols are summed; symbols whose total is zero
    /// are left out.
    pub fn from_counts<I: IntoIterator<Item = (Symbol, u64)>>(pairs: I) -> Self {
        let mut counts = BTreeMap::new();
        for (symbol, count) in pairs {
            *counts.entry(symbol).or_insert(0) += count;
        }
        counts.retain(|_, count| *count > 0);
        Self { counts }
    }

    /// Count of `symbol`, or 0 if it never occurs.
    pub fn get(&self, symbol: Symbol) -> u64 {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    /// Whether `symbol` occurs.
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.counts.contains_key(&symbol)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the table has no symbols.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of symbols counted.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterate over `(symbol, count)` in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, u64)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }
}

impl TryFrom<BTreeMap<Symbol, u64>> for FrequencyTable {
    type Error = HuffError;

    fn try_from(counts: BTreeMap<Symbol, u64>) -> Result<Self> {
        if let Some((&symbol, _)) = counts.iter().find(|(_, count)| **count == 0) {
            return Err(HuffError::zero_frequency(symbol));
        }
        Ok(Self { counts })
    }
}

impl From<FrequencyTable> for BTreeMap<Symbol, u64> {
    fn from(table: FrequencyTable) -> Self {
        table.counts
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = (&'a Symbol, &'a u64);
    type IntoIter = btree_map::Iter<'a, Symbol, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}

/// Count the occurrences of each distinct symbol of `text`.
///
/// Fails with [`HuffError::EmptyInput`] when `text` is empty.
///
/// # Example
///
/// ```
/// use oxihuff_huffman::count_frequencies;
///
/// let freq = count_frequencies("aaab").unwrap();
/// assert_eq!(freq.get('a'), 3);
/// assert_eq!(freq.get('b'), 1);
/// ```
pub fn count_frequencies(text: &str) -> Result<FrequencyTable> {
    count_frequencies_with(text, &CodecConfig::DEFAULT)
}

/// Count symbol occurrences under the given configuration.
///
/// With `ascii_only` set, the first non-ASCII symbol fails the whole count
/// with [`HuffError::NonAsciiSymbol`].
pub fn count_frequencies_with(text: &str, config: &CodecConfig) -> Result<FrequencyTable> {
    if text.is_empty() {
        return Err(HuffError::EmptyInput);
    }

    let mut counts = BTreeMap::new();
    for (position, symbol) in text.chars().enumerate() {
        if config.ascii_only && !symbol.is_ascii() {
            return Err(HuffError::non_ascii(symbol, position));
        }
        *counts.entry(symbol).or_insert(0u64) += 1;
    }

    tracing::debug!(distinct = counts.len(), "counted symbol frequencies");
    Ok(FrequencyTable { counts })
}
