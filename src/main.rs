//! tex2text - Convert a TeX document into plain text
//!
//! Usage:
//!   tex2text `<input>` `<output>`
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`
//! (default `warn`).

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use tex2text::{Options, VERSION, convert_path};

/// Specify input and output file.
#[derive(Parser, Debug)]
#[command(name = "tex2text", version = VERSION)]
struct Args {
    /// Input file
    input: PathBuf,

    /// Output file
    output: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();

    if let Err(e) = convert_path(&args.input, &args.output, &Options::default()) {
        error!("{}", e);
        process::exit(1);
    }
}
