//! `mango-match`: filter newline-delimited JSON documents with a Mango selector.
//!
//! Usage:
//!   mango-match '<selector>' [--input <FILE>] [--count] [--strict]
//!
//! Documents are read from stdin unless `--input` is given. Matching
//! documents are written to stdout, one per line.

use clap::Parser;
use mango::mango_cli::{filter_documents, CliError, FilterOptions};
use mango::Selector;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mango-match", version, about = "Filter JSON documents with a Mango selector")]
struct Args {
    /// Selector document, e.g. '{"director": {"$lt": "M"}}'
    selector: String,

    /// Read documents from FILE instead of stdin
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Print only the number of matching documents
    #[arg(short, long)]
    count: bool,

    /// Fail on documents that are not JSON objects
    #[arg(long)]
    strict: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let selector = Selector::new(&args.selector)?;
    log::debug!("selector: {selector}");

    let input: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };
    let options = FilterOptions {
        strict: args.strict,
        count_only: args.count,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = filter_documents(&selector, input, &mut out, &options)?;
    if args.count {
        writeln!(out, "{}", summary.matched)?;
    }
    out.flush()?;
    Ok(())
}
