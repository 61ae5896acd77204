//! lzpack CLI - LZSS stream compressor
//!
//! Encodes or decodes a single stream between files or standard
//! input/output.

use clap::Parser;
use lzpack_lzss::HashChain;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "lzpack")]
#[command(version, about = "LZSS sliding-window stream compression")]
#[command(long_about = "
lzpack compresses a byte stream with LZSS: repeated sequences become
(offset, length) back-references against a 4 KiB sliding dictionary.

Examples:
  lzpack -c -i notes.txt -o notes.lzp
  lzpack -d -i notes.lzp -o notes.txt
  lzpack -c < notes.txt > notes.lzp

Default: encode from stdin to stdout
")]
struct Cli {
    /// Encode input to output (default)
    #[arg(short = 'c', conflicts_with = "decode")]
    compress: bool,

    /// Decode input to output
    #[arg(short = 'd')]
    decode: bool,

    /// Input file (stdin when omitted)
    #[arg(short = 'i', value_name = "PATH")]
    input: Option<PathBuf>,

    /// Output file (stdout when omitted)
    #[arg(short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let input: Box<dyn Read> = match &cli.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };

    let output: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };

    if cli.decode {
        lzpack_lzss::decode(input, output)?;
    } else {
        lzpack_lzss::encode_with(input, output, &mut HashChain::new())?;
    }

    Ok(())
}
