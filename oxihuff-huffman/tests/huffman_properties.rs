//! Property tests for the Huffman pipeline.
//!
//! These check the structural guarantees of the code (prefix-free,
//! complete, optimal ordering) and of the encoding over random texts.

use oxihuff_huffman::{
    CodeTable, CodecConfig, HuffmanEntry, assemble_report, build_huffman_codes, compress_text,
    count_frequencies, encode_text, total_bits,
};
use proptest::prelude::*;

/// Non-empty texts over a small alphabet, so that symbols repeat and tie.
fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::char::range('a', 'h'), 1..200)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Non-empty texts over arbitrary scalar values.
fn unicode_text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 1..64).prop_map(|chars| chars.into_iter().collect())
}

fn report_for(text: &str) -> Vec<HuffmanEntry> {
    let freq = count_frequencies(text).unwrap();
    let codes = build_huffman_codes(&freq).unwrap();
    assemble_report(&codes, &freq).unwrap()
}

proptest! {
    #[test]
    fn test_codes_are_prefix_free(text in text_strategy()) {
        let report = report_for(&text);
        for a in &report {
            for b in &report {
                if a.symbol != b.symbol {
                    prop_assert!(!b.code.starts_with(&a.code), "{:?} prefixes {:?}", a, b);
                }
            }
        }
    }

    #[test]
    fn test_every_symbol_once(text in text_strategy()) {
        let freq = count_frequencies(&text).unwrap();
        let codes = build_huffman_codes(&freq).unwrap();
        prop_assert_eq!(codes.len(), freq.len());

        let mut symbols: Vec<char> = codes.iter().map(|(s, _)| *s).collect();
        symbols.sort_unstable();
        symbols.dedup();
        prop_assert_eq!(symbols.len(), freq.len());
        prop_assert!(symbols.iter().all(|&s| freq.contains(s)));
    }

    #[test]
    fn test_bit_count_is_conserved(text in text_strategy()) {
        let report = report_for(&text);
        let table = CodeTable::from_report(&report).unwrap();
        let bits = encode_text(&text, &table).unwrap();

        let per_char: usize = text.chars().map(|c| table.get(c).map_or(0, str::len)).sum();
        prop_assert_eq!(bits.len(), per_char);
        prop_assert_eq!(bits.len() as u64, total_bits(&report));
    }

    #[test]
    fn test_frequent_symbols_get_shorter_codes(text in text_strategy()) {
        let report = report_for(&text);
        for a in &report {
            for b in &report {
                if a.frequency > b.frequency {
                    prop_assert!(a.code_len() <= b.code_len(), "{:?} vs {:?}", a, b);
                }
            }
        }
    }

    #[test]
    fn test_report_is_sorted(text in text_strategy()) {
        let report = report_for(&text);
        for pair in report.windows(2) {
            prop_assert!(
                (pair[0].code_len(), pair[0].symbol) < (pair[1].code_len(), pair[1].symbol)
            );
        }
    }

    #[test]
    fn test_codes_fill_the_tree(text in text_strategy()) {
        // Kraft equality: a full binary tree has sum(2^-len) == 1
        let report = report_for(&text);
        prop_assume!(report.len() > 1);
        let max = report.iter().map(|e| e.code_len()).max().unwrap_or(0);
        let sum: u128 = report.iter().map(|e| 1u128 << (max - e.code_len())).sum();
        prop_assert_eq!(sum, 1u128 << max);
    }

    #[test]
    fn test_pipeline_is_deterministic(text in text_strategy()) {
        let first = compress_text(&text).unwrap();
        let second = compress_text(&text).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_hex_length(text in text_strategy()) {
        let c = compress_text(&text).unwrap();
        prop_assert_eq!(c.hex().len(), c.bits.len().div_ceil(4));
    }

    #[test]
    fn test_round_trip(text in unicode_text_strategy()) {
        let c = compress_text(&text).unwrap();
        prop_assert_eq!(c.decompress().unwrap(), text);
    }

    #[test]
    fn test_json_round_trip(text in text_strategy()) {
        let c = compress_text(&text).unwrap();
        let json = serde_json::to_string(&c).unwrap();
        let back: oxihuff_huffman::Compression = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back.decompress().unwrap(), text);
    }
}

#[test]
fn test_ascii_only_config_accepts_ascii() {
    let config = CodecConfig::new().with_ascii_only(true);
    assert!(oxihuff_huffman::compress_text_with("plain ascii text", &config).is_ok());
}
