// Copyright (C) Brian G. Milnes 2025

//! Parse a Rust file and summarize its fn declarations
//!
//! Shows each declaration the duplicator cares about and whether it is
//! eligible. With --ast the raw syntax tree is dumped instead.
//!
//! Binary: paramdup-parse

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "parse")]
#[command(about = "Parse a Rust file and summarize its fn declarations", long_about = None)]
struct Args {
    /// Path to the Rust file to parse
    #[arg(short, long)]
    path: PathBuf,

    /// Dump the raw syntax tree instead of the fn summary
    #[arg(short, long)]
    ast: bool,
}

fn main() -> Result<()> {
    let start = Instant::now();
    let args = Args::parse();

    // Print directory context
    let parent_dir = args.path.parent()
        .unwrap_or_else(|| std::path::Path::new("."));
    println!("Entering directory '{}'", parent_dir.display());
    println!();

    println!("Parsing file: {:?}", args.path);

    if args.ast {
        let source = std::fs::read_to_string(&args.path)?;
        let syntax = paramdup::parse_file(&source)?;
        println!("{syntax:#?}");
    } else {
        paramdup::parse(&args.path)?;
    }

    println!();
    println!("Completed in {}ms", start.elapsed().as_millis());

    Ok(())
}
