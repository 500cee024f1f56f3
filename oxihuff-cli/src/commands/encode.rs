//! Encode command implementation.

use crate::utils::{highlight_bits, print_report};
use oxihuff_huffman::{CodecConfig, compress_text_with, symbol_spans};

/// Number of leading characters whose codes are highlighted.
const HIGHLIGHTED_SYMBOLS: usize = 2;

/// Options for the encode command.
pub struct EncodeOptions {
    pub json: bool,
    pub color: bool,
    pub config: CodecConfig,
}

pub fn cmd_encode(text: &str, options: &EncodeOptions) -> Result<(), Box<dyn std::error::Error>> {
    let compression = compress_text_with(text, &options.config)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&compression)?);
        return Ok(());
    }

    let summary = &compression.summary;
    let table = compression.code_table()?;
    let spans = symbol_spans(text, &table, HIGHLIGHTED_SYMBOLS)?;

    println!("Original text: {} bytes", summary.input_bytes);
    println!();
    print_report(&compression.report);

    println!();
    println!("Huffman encoded text: {} bits", summary.total_bits);
    println!(
        "{}",
        highlight_bits(compression.bits.as_str(), &spans, options.color)
    );

    println!();
    println!("Compressed text: {} bytes", summary.packed_bytes);
    println!("{}", compression.hex());
    if compression.packed.padding() > 0 {
        println!("({} padding bits)", compression.packed.padding());
    }

    println!();
    println!(
        "{:.3} bits/symbol, {:.1}% space savings",
        summary.bits_per_symbol(),
        summary.space_savings()
    );

    Ok(())
}
