//! Symbol to code lookup.
//!
//! A [`CodeTable`] is the mapping the encoder and decoder work from. It is
//! checked on construction to be a prefix code: binary codes only, one code
//! per symbol, and no code a prefix of another. An empty code is accepted
//! only as the sole entry of a single-symbol table.

use oxihuff_core::Symbol;
use oxihuff_core::bitstring::validate_bits;
use oxihuff_core::error::{HuffError, Result};
use std::collections::BTreeMap;

use crate::report::HuffmanEntry;

/// Validated mapping from symbol to binary code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<Symbol, String>,
}

impl CodeTable {
    /// Build a table from `(symbol, code)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Symbol, S)>,
        S: Into<String>,
    {
        let mut codes = BTreeMap::new();
        for (symbol, code) in pairs {
            let code = code.into();
            if validate_bits(&code).is_err() {
                return Err(HuffError::invalid_code_table(format!(
                    "code {code:?} of symbol {symbol:?} is not binary"
                )));
            }
            if codes.insert(symbol, code).is_some() {
                return Err(HuffError::invalid_code_table(format!(
                    "symbol {symbol:?} appears more than once"
                )));
            }
        }

        let table = Self { codes };
        table.check_prefix_free()?;
        Ok(table)
    }

    /// Build a table from report rows.
    pub fn from_report(report: &[HuffmanEntry]) -> Result<Self> {
        Self::from_pairs(report.iter().map(|e| (e.symbol, e.code.as_str())))
    }

    fn check_prefix_free(&self) -> Result<()> {
        if self.codes.is_empty() {
            return Err(HuffError::invalid_code_table("table has no codes"));
        }

        // In lexicographic order a code that prefixes any other code also
        // prefixes its immediate successor.
        let mut sorted: Vec<(&str, Symbol)> =
            self.codes.iter().map(|(&s, c)| (c.as_str(), s)).collect();
        sorted.sort_unstable();

        for pair in sorted.windows(2) {
            let (short, a) = pair[0];
            let (long, b) = pair[1];
            if long.starts_with(short) {
                return Err(HuffError::invalid_code_table(format!(
                    "code {short:?} of {a:?} is a prefix of code {long:?} of {b:?}"
                )));
            }
        }
        Ok(())
    }

    /// Code of `symbol`, if any.
    pub fn get(&self, symbol: Symbol) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Always false for a constructed table; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Whether this is a single-symbol table with an empty code.
    ///
    /// Text encoded with such a table produces no bits at all.
    pub fn is_degenerate(&self) -> bool {
        self.codes.values().any(String::is_empty)
    }

    /// Iterate over `(symbol, code)` in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &str)> + '_ {
        self.codes.iter().map(|(&s, c)| (s, c.as_str()))
    }
}
