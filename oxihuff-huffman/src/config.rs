//! Codec configuration.

use serde::{Deserialize, Serialize};

/// Code assigned when the text contains exactly one distinct symbol.
///
/// With a single symbol the Huffman merge loop never runs, so the plain
/// algorithm leaves that symbol with an empty code and the encoded text is
/// an empty bit string regardless of its length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SingleSymbolCode {
    /// Assign the 1-bit code `"0"`, so every character costs one bit.
    #[default]
    OneBit,
    /// Keep the empty code produced by the merge loop.
    Empty,
}

/// Huffman codec configuration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Code for single-symbol texts.
    pub single_symbol: SingleSymbolCode,
    /// Reject symbols outside the ASCII range.
    pub ascii_only: bool,
}

impl CodecConfig {
    /// Default configuration.
    ///
    /// - 1-bit code for single-symbol texts
    /// - Any Unicode scalar value is a symbol
    pub const DEFAULT: Self = Self {
        single_symbol: SingleSymbolCode::OneBit,
        ascii_only: false,
    };

    /// Configuration reproducing the classic desktop tool.
    ///
    /// - Empty code for single-symbol texts
    /// - ASCII input only
    pub const ORIGINAL: Self = Self {
        single_symbol: SingleSymbolCode::Empty,
        ascii_only: true,
    };

    /// Create the default configuration.
    pub fn new() -> Self {
        Self::DEFAULT
    }

    /// Builder method to set the single-symbol code policy.
    pub fn with_single_symbol(mut self, single_symbol: SingleSymbolCode) -> Self {
        self.single_symbol = single_symbol;
        self
    }

    /// Builder method to restrict input to ASCII.
    pub fn with_ascii_only(mut self, ascii_only: bool) -> Self {
        self.ascii_only = ascii_only;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CodecConfig::default();
        assert_eq!(config, CodecConfig::DEFAULT);
        assert_eq!(config.single_symbol, SingleSymbolCode::OneBit);
        assert!(!config.ascii_only);
    }

    #[test]
    fn test_original_config() {
        let config = CodecConfig::ORIGINAL;
        assert_eq!(config.single_symbol, SingleSymbolCode::Empty);
        assert!(config.ascii_only);
    }

    #[test]
    fn test_builder() {
        let config = CodecConfig::new()
            .with_single_symbol(SingleSymbolCode::Empty)
            .with_ascii_only(true);
        assert_eq!(config, CodecConfig::ORIGINAL);
    }
}
