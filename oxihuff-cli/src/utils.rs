//! Utility functions for the CLI.

use oxihuff_core::Symbol;
use oxihuff_huffman::{HuffmanEntry, SymbolSpan};
use std::io::{self, Read};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Highlight colours for consecutive spans (yellow, light blue backgrounds).
const SPAN_COLORS: [&str; 2] = ["\x1b[30;43m", "\x1b[30;104m"];
const RESET: &str = "\x1b[0m";

/// Install the stderr log subscriber.
pub fn init_tracing(verbose: bool) {
    let default = if verbose {
        "warn,oxihuff_core=debug,oxihuff_huffman=debug,oxihuff=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Get the text to encode from the argument, a file, or stdin.
pub fn read_input(text: Option<String>, file: Option<&Path>) -> io::Result<String> {
    match (text, file) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => std::fs::read_to_string(path),
        (None, None) => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Printable form of a symbol: escapes for control characters, a visible
/// marker for space.
pub fn display_symbol(symbol: Symbol) -> String {
    match symbol {
        ' ' => "' '".to_string(),
        c if c.is_control() => c.escape_default().to_string(),
        c => c.to_string(),
    }
}

/// Print the code report as a table.
pub fn print_report(report: &[HuffmanEntry]) {
    let code_width = report
        .iter()
        .map(HuffmanEntry::code_len)
        .max()
        .unwrap_or(0)
        .max(4);

    println!(
        "{:>8} {:>10} {:<code_width$} {:>10}",
        "Symbol", "Frequency", "Code", "Total bits"
    );
    println!("{}", "-".repeat(31 + code_width));

    for entry in report {
        println!(
            "{:>8} {:>10} {:<code_width$} {:>10}",
            display_symbol(entry.symbol),
            entry.frequency,
            entry.code,
            entry.total_bits
        );
    }
}

/// Wrap the bits of each span in alternating ANSI background colours.
pub fn highlight_bits(bits: &str, spans: &[SymbolSpan], color: bool) -> String {
    if !color || spans.is_empty() {
        return bits.to_string();
    }

    let mut out = String::with_capacity(bits.len() + spans.len() * 16);
    let mut pos = 0;
    for (i, span) in spans.iter().enumerate() {
        let (start, end) = (span.bits.start.min(bits.len()), span.bits.end.min(bits.len()));
        if start >= end {
            continue;
        }
        out.push_str(&bits[pos..start]);
        out.push_str(SPAN_COLORS[i % SPAN_COLORS.len()]);
        out.push_str(&bits[start..end]);
        out.push_str(RESET);
        pos = end;
    }
    out.push_str(&bits[pos..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(symbol: Symbol, start: usize, end: usize) -> SymbolSpan {
        SymbolSpan {
            symbol,
            bits: start..end,
        }
    }

    #[test]
    fn test_highlight_bits() {
        let spans = [span('m', 0, 3), span('i', 3, 5)];
        let out = highlight_bits("10011001", &spans, true);
        assert_eq!(
            out,
            format!(
                "{}100{}{}11{}001",
                SPAN_COLORS[0], RESET, SPAN_COLORS[1], RESET
            )
        );
    }

    #[test]
    fn test_highlight_disabled() {
        let spans = [span('a', 0, 1)];
        assert_eq!(highlight_bits("0101", &spans, false), "0101");
    }

    #[test]
    fn test_highlight_empty_codes() {
        // Single-symbol text with an empty code: nothing to highlight
        let spans = [span('a', 0, 0), span('a', 0, 0)];
        assert_eq!(highlight_bits("", &spans, true), "");
    }

    #[test]
    fn test_display_symbol() {
        assert_eq!(display_symbol('a'), "a");
        assert_eq!(display_symbol(' '), "' '");
        assert_eq!(display_symbol('\n'), "\\n");
        assert_eq!(display_symbol('\t'), "\\t");
    }
}
