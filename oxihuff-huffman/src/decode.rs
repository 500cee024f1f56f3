//! Bit string to text decoding.
//!
//! The code table is turned into a binary trie stored in a flat arena;
//! decoding walks it from the root, one bit per step, and emits a symbol
//! whenever it reaches a leaf.

use oxihuff_core::Symbol;
use oxihuff_core::bitstring::BitString;
use oxihuff_core::error::{HuffError, Result};

use crate::table::CodeTable;

const ROOT: usize = 0;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    /// Arena indices of the `0` and `1` children.
    children: [Option<usize>; 2],
    symbol: Option<Symbol>,
}

/// Decoding trie for one code table.
#[derive(Debug, Clone)]
pub struct DecodeTree {
    nodes: Vec<TrieNode>,
}

impl DecodeTree {
    /// Build the trie for `table`.
    ///
    /// A degenerate table (one symbol, empty code) is rejected: its bit
    /// strings are always empty, so the text cannot be recovered from them.
    pub fn new(table: &CodeTable) -> Result<Self> {
        if table.is_degenerate() {
            return Err(HuffError::invalid_code_table("an empty code cannot be decoded"));
        }

        let mut nodes = vec![TrieNode::default()];
        for (symbol, code) in table.iter() {
            let mut index = ROOT;
            for bit in code.bytes().map(|b| usize::from(b == b'1')) {
                let next = nodes[index].children[bit];
                index = match next {
                    Some(child) => child,
                    None => {
                        nodes.push(TrieNode::default());
                        let child = nodes.len() - 1;
                        nodes[index].children[bit] = Some(child);
                        child
                    }
                };
            }
            nodes[index].symbol = Some(symbol);
        }

        Ok(Self { nodes })
    }

    /// Decode a whole bit string.
    ///
    /// Fails with [`HuffError::InvalidCode`] if the bits leave the trie or
    /// end in the middle of a code.
    pub fn decode(&self, bits: &BitString) -> Result<String> {
        let mut text = String::new();
        let mut index = ROOT;
        let mut code_start = 0;

        for (position, bit) in bits.iter().enumerate() {
            index = self.nodes[index].children[usize::from(bit)]
                .ok_or_else(|| HuffError::invalid_code(code_start))?;
            if let Some(symbol) = self.nodes[index].symbol {
                text.push(symbol);
                index = ROOT;
                code_start = position + 1;
            }
        }

        if index != ROOT {
            return Err(HuffError::invalid_code(code_start));
        }
        Ok(text)
    }
}

/// Decode `bits` with `table`.
///
/// # Example
///
/// ```
/// use oxihuff_core::BitString;
/// use oxihuff_huffman::{CodeTable, decode_bits};
///
/// let table = CodeTable::from_pairs([('a', "1"), ('b', "0")]).unwrap();
/// let bits = BitString::parse("1110").unwrap();
/// assert_eq!(decode_bits(&bits, &table).unwrap(), "aaab");
/// ```
pub fn decode_bits(bits: &BitString, table: &CodeTable) -> Result<String> {
    let text = DecodeTree::new(table)?.decode(bits)?;
    tracing::debug!(symbols = text.chars().count(), "decoded bits");
    Ok(text)
}
