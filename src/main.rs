//! edif - EDIF netlist checker
//!
//! Parses each file given on the command line and reports errors.
//!
//! # Usage
//!
//! ```bash
//! edif design.edf                 # syntax check
//! edif --stats -d top.edf lib.edf # per-file summary, construct trace
//! edif --tokens design.edf        # token transcript
//! ```

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use edif_core::edif::{open_source, EdifReader, Lexer, NetlistStats};
use edif_core::error::Result;
use log::LevelFilter;

/// EDIF netlist parser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// EDIF files to read, in order
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Parser trace level; repeat for per-token output
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,

    /// Print a summary of each netlist
    #[arg(long)]
    stats: bool,

    /// Print the token stream instead of parsing
    #[arg(long)]
    tokens: bool,

    /// Exit successfully even if some files failed
    #[arg(long)]
    keep_going: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.debug {
        0 => LevelFilter::Error,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let mut failures = 0;
    for path in &args.files {
        let ok = if args.tokens {
            dump_tokens(path)
        } else {
            read_file(path, &args)
        };
        if !ok {
            failures += 1;
        }
    }

    if failures > 0 && !args.keep_going {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn read_file(path: &Path, args: &Args) -> bool {
    let Some(source) = open(path) else {
        return false;
    };
    println!("reading {}", path.display());

    let mut reader = EdifReader::new(NetlistStats::new());
    reader.set_debug_level(u32::from(args.debug));
    match reader.read_from(source) {
        Ok(()) => {
            if args.stats {
                print!("{}", reader.visitor());
            }
            true
        }
        Err(e) => {
            eprintln!("{}: {}", path.display(), e);
            false
        }
    }
}

fn dump_tokens(path: &Path) -> bool {
    let Some(source) = open(path) else {
        return false;
    };

    match transcribe(source) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("{}: {}", path.display(), e);
            false
        }
    }
}

fn open(path: &Path) -> Option<BufReader<File>> {
    match open_source(path) {
        Ok(source) => Some(source),
        Err(e) => {
            eprintln!("{}: no such file ({})", path.display(), e);
            None
        }
    }
}

fn transcribe(source: impl Read + 'static) -> Result<()> {
    let mut lexer = Lexer::new();
    lexer.switch_streams(source, Some(Box::new(io::stdout())));
    while !lexer.get_token()?.is_eof() {}
    Ok(())
}
