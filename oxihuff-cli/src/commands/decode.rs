//! Decode command implementation.

use oxihuff_huffman::Compression;
use std::fs;
use std::path::Path;

pub fn cmd_decode(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let json = fs::read_to_string(input)?;
    let compression: Compression = serde_json::from_str(&json)?;

    let text = compression.decompress()?;
    print!("{}", text);
    if !text.ends_with('\n') {
        println!();
    }

    Ok(())
}
