//! Huffman tree construction.
//!
//! The tree is built greedily over a min-priority queue. Each queue node
//! carries the `(symbol, code)` pairs of every leaf below it; merging two
//! nodes extends the codes of the lighter node with `0` and those of the
//! heavier one with `1`. When one node is left its payload is the code.
//!
//! # Tie-break
//!
//! Nodes are ordered by weight, then by their lead symbol (the first symbol
//! of the payload, which for a merged node is the lead of its `0` child).
//! Every symbol belongs to exactly one node, so this is a total order and
//! the resulting code only depends on the frequency table.
//!
//! # Example
//!
//! ```
//! use oxihuff_huffman::{build_huffman_codes, count_frequencies};
//!
//! let freq = count_frequencies("aaab").unwrap();
//! let codes = build_huffman_codes(&freq).unwrap();
//! assert_eq!(codes, vec![('a', "1".to_string()), ('b', "0".to_string())]);
//! ```

use oxihuff_core::Symbol;
use oxihuff_core::error::{HuffError, Result};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::config::{CodecConfig, SingleSymbolCode};
use crate::frequency::FrequencyTable;

/// A weighted node of the Huffman queue.
///
/// Codes in the payload are stored leaf-to-root: each merge pushes one bit
/// to the end, and [`HeapNode::into_codes`] reverses them.
#[derive(Debug, Clone, PartialEq, Eq)]
struct HeapNode {
    weight: u64,
    lead: Symbol,
    payload: Vec<(Symbol, String)>,
}

impl HeapNode {
    fn leaf(symbol: Symbol, weight: u64) -> Self {
        Self {
            weight,
            lead: symbol,
            payload: vec![(symbol, String::new())],
        }
    }

    /// Merge two nodes; `left` must not order after `right`.
    fn merge(mut left: Self, mut right: Self) -> Self {
        for (_, code) in &mut left.payload {
            code.push('0');
        }
        for (_, code) in &mut right.payload {
            code.push('1');
        }
        left.payload.append(&mut right.payload);

        Self {
            weight: left.weight + right.weight,
            lead: left.lead,
            payload: left.payload,
        }
    }

    fn into_codes(self) -> Vec<(Symbol, String)> {
        self.payload
            .into_iter()
            .map(|(symbol, code)| (symbol, code.chars().rev().collect()))
            .collect()
    }
}

impl Ord for HeapNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so that BinaryHeap pops the lightest node first
        (other.weight, other.lead).cmp(&(self.weight, self.lead))
    }
}

impl PartialOrd for HeapNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build the Huffman code of every symbol in `freq`.
///
/// The result holds one `(symbol, code)` pair per symbol, sorted by code
/// length, then symbol, then code. Fails with [`HuffError::EmptyInput`] if
/// the table is empty.
pub fn build_huffman_codes(freq: &FrequencyTable) -> Result<Vec<(Symbol, String)>> {
    build_huffman_codes_with(freq, &CodecConfig::DEFAULT)
}

/// Build Huffman codes under the given configuration.
///
/// The configuration decides what a lone symbol gets: see
/// [`SingleSymbolCode`].
pub fn build_huffman_codes_with(
    freq: &FrequencyTable,
    config: &CodecConfig,
) -> Result<Vec<(Symbol, String)>> {
    if freq.is_empty() {
        return Err(HuffError::EmptyInput);
    }

    let mut heap: BinaryHeap<HeapNode> = freq
        .iter()
        .map(|(symbol, count)| HeapNode::leaf(symbol, count))
        .collect();

    while heap.len() > 1 {
        let (Some(left), Some(right)) = (heap.pop(), heap.pop()) else {
            break;
        };
        tracing::trace!(
            left = ?left.lead,
            left_weight = left.weight,
            right = ?right.lead,
            right_weight = right.weight,
            "merging nodes"
        );
        heap.push(HeapNode::merge(left, right));
    }

    let root = heap.pop().ok_or(HuffError::EmptyInput)?;
    let mut codes = root.into_codes();

    if let [(symbol, code)] = codes.as_mut_slice() {
        if config.single_symbol == SingleSymbolCode::OneBit {
            tracing::debug!(symbol = ?symbol, "single symbol input, assigning 1-bit code");
            code.push('0');
        }
    }

    codes.sort_by(|(sa, ca), (sb, cb)| (ca.len(), sa, ca).cmp(&(cb.len(), sb, cb)));

    tracing::debug!(
        symbols = codes.len(),
        max_len = codes.last().map_or(0, |(_, c)| c.len()),
        "built huffman codes"
    );
    Ok(codes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::count_frequencies;

    fn codes_for(text: &str) -> Vec<(Symbol, String)> {
        build_huffman_codes(&count_frequencies(text).unwrap()).unwrap()
    }

    fn pairs(expected: &[(Symbol, &str)]) -> Vec<(Symbol, String)> {
        expected.iter().map(|&(s, c)| (s, c.to_string())).collect()
    }

    #[test]
    fn test_lighter_node_gets_zero() {
        assert_eq!(codes_for("aaab"), pairs(&[('a', "1"), ('b', "0")]));
    }

    #[test]
    fn test_equal_weights_break_on_symbol() {
        assert_eq!(codes_for("ab"), pairs(&[('a', "0"), ('b', "1")]));
        assert_eq!(codes_for("ba"), pairs(&[('a', "0"), ('b', "1")]));
    }

    #[test]
    fn test_abracadabra() {
        assert_eq!(
            codes_for("abracadabra"),
            pairs(&[
                ('a', "0"),
                ('r', "10"),
                ('b', "110"),
                ('c', "1110"),
                ('d', "1111"),
            ])
        );
    }

    #[test]
    fn test_sorted_by_length_then_symbol() {
        assert_eq!(
            codes_for("mississippi"),
            pairs(&[('s', "0"), ('i', "11"), ('m', "100"), ('p', "101")])
        );
    }

    #[test]
    fn test_single_symbol_one_bit() {
        assert_eq!(codes_for("aaaa"), pairs(&[('a', "0")]));
    }

    #[test]
    fn test_single_symbol_empty() {
        let freq = count_frequencies("aaaa").unwrap();
        let config = CodecConfig::new().with_single_symbol(SingleSymbolCode::Empty);
        let codes = build_huffman_codes_with(&freq, &config).unwrap();
        assert_eq!(codes, pairs(&[('a', "")]));
    }

    #[test]
    fn test_empty_table() {
        let freq = FrequencyTable::default();
        assert!(matches!(build_huffman_codes(&freq), Err(HuffError::EmptyInput)));
    }

    #[test]
    fn test_heap_order() {
        let mut heap = BinaryHeap::new();
        heap.push(HeapNode::leaf('c', 1));
        heap.push(HeapNode::leaf('a', 5));
        heap.push(HeapNode::leaf('b', 1));
        assert_eq!(heap.pop().map(|n| n.lead), Some('b'));
        assert_eq!(heap.pop().map(|n| n.lead), Some('c'));
        assert_eq!(heap.pop().map(|n| n.lead), Some('a'));
    }

    #[test]
    fn test_merge_keeps_left_lead() {
        let merged = HeapNode::merge(HeapNode::leaf('x', 2), HeapNode::leaf('a', 3));
        assert_eq!(merged.weight, 5);
        assert_eq!(merged.lead, 'x');
        assert_eq!(merged.into_codes(), pairs(&[('x', "0"), ('a', "1")]));
    }
}
