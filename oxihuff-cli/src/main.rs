//! OxiHuff CLI
//!
//! Huffman-encode text and show the code table, the encoded bits and the
//! packed hexadecimal form.

mod commands;
mod utils;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use commands::{EncodeOptions, cmd_decode, cmd_encode};
use oxihuff_huffman::{CodecConfig, SingleSymbolCode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oxihuff")]
#[command(author, version, about = "Huffman text encoder - Pure Rust")]
#[command(long_about = "
OxiHuff builds a Huffman code for the characters of a text, encodes the
text into a bit string and packs the bits into hexadecimal digits.

Examples:
  oxihuff encode \"abracadabra\"
  oxihuff encode -f notes.txt
  echo -n \"hello world\" | oxihuff encode
  oxihuff encode --json \"hello world\" > hello.json
  oxihuff decode hello.json
  oxihuff completions bash
")]
struct Cli {
    /// Show debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode text and show the code table, bits and hex
    #[command(alias = "e")]
    Encode {
        /// Text to encode (read from stdin if neither TEXT nor --file is given)
        #[arg(conflicts_with = "file")]
        text: Option<String>,

        /// Read the text from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output as JSON (machine-readable, accepted by `decode`)
        #[arg(short, long)]
        json: bool,

        /// Reject non-ASCII characters
        #[arg(long)]
        ascii: bool,

        /// Code for a text made of a single repeated character
        #[arg(long, value_enum, default_value = "one-bit")]
        single_symbol: SingleSymbolArg,

        /// Disable highlighting of the first two codes
        #[arg(long)]
        no_color: bool,
    },

    /// Decode a JSON document produced by `encode --json`
    #[command(alias = "d")]
    Decode {
        /// JSON file to decode
        input: PathBuf,
    },

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Single-symbol code policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
enum SingleSymbolArg {
    /// One bit per character (default)
    #[default]
    OneBit,
    /// Empty code, no bits at all
    Empty,
}

impl From<SingleSymbolArg> for SingleSymbolCode {
    fn from(arg: SingleSymbolArg) -> Self {
        match arg {
            SingleSymbolArg::OneBit => SingleSymbolCode::OneBit,
            SingleSymbolArg::Empty => SingleSymbolCode::Empty,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    utils::init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Encode {
            text,
            file,
            json,
            ascii,
            single_symbol,
            no_color,
        } => {
            let options = EncodeOptions {
                json,
                color: !no_color,
                config: CodecConfig::new()
                    .with_ascii_only(ascii)
                    .with_single_symbol(single_symbol.into()),
            };
            match utils::read_input(text, file.as_deref()) {
                Ok(text) => cmd_encode(&text, &options),
                Err(e) => Err(e.into()),
            }
        }
        Commands::Decode { input } => cmd_decode(&input),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "oxihuff", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
