// Copyright (C) Brian G. Milnes 2025

//! Duplicate the single parameter of each eligible fn in one file
//!
//! Rewrites every fn declaration that takes exactly one named parameter
//! so that it takes two, and reports how many declarations changed.
//! Without --in-place the rewritten source goes to stdout.
//!
//! Binary: paramdup-fix

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;


macro_rules! log {
    ($($arg:tt)*) => {{
        use std::io::Write;
        let msg = format!($($arg)*);
        eprintln!("{}", msg);
        if let Ok(mut file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("analyses/fix.log")
        {
            let _ = writeln!(file, "{}", msg);
        }
    }};
}

#[derive(Parser)]
#[command(name = "fix")]
#[command(about = "Duplicate single fn parameters in a Rust file", long_about = None)]
struct Args {
    /// Path to the Rust file to fix
    #[arg(short, long)]
    path: PathBuf,

    /// Apply the rewrite in-place instead of printing to stdout
    #[arg(short, long)]
    in_place: bool,

    /// Report what would change without modifying anything
    #[arg(short, long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    let start = Instant::now();
    let args = Args::parse();

    // Print directory context
    let parent_dir = args.path.parent()
        .unwrap_or_else(|| std::path::Path::new("."));
    log!("Entering directory '{}'", parent_dir.display());
    log!("");

    log!("Fixing file: {:?}", args.path);
    log!("In-place: {}", args.in_place);
    log!("Dry-run: {}", args.dry_run);

    let modified = if args.dry_run {
        let source = std::fs::read_to_string(&args.path)?;
        let (_, modified) = paramdup::rewrite_source(&source)?;
        log!("[DRY RUN] Would modify {} declaration(s)", modified);
        modified
    } else {
        paramdup::fix_file(&args.path, args.in_place)?
    };

    log!("");
    log!("Declarations modified: {}", modified);
    log!("Completed in {}ms", start.elapsed().as_millis());

    Ok(())
}
