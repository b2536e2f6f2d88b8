// Copyright (C) Brian G. Milnes 2025

//! Fix: Duplicate single fn parameters across a tree
//!
//! For each .rs file under the search directories, rewrites every fn
//! declaration with exactly one named parameter to take a duplicate
//! second parameter. Files rewrite independently, so the sweep runs in
//! parallel and the per-file counts are summed at the end.
//!
//! Binary: paramdup-fix-all

use anyhow::Result;
use paramdup::{find_rust_files, format_number, StandardArgs};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;


macro_rules! log {
    ($($arg:tt)*) => {{
        use std::io::Write;
        let msg = format!($($arg)*);
        println!("{}", msg);
        if let Ok(mut file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("analyses/fix_all.log")
        {
            let _ = writeln!(file, "{}", msg);
        }
    }};
}

#[derive(Debug)]
struct Fix {
    file: PathBuf,
    modified: usize,
}

fn fix_file(file_path: &Path, dry_run: bool) -> Result<Option<Fix>> {
    let source = fs::read_to_string(file_path)?;
    let (fixed, modified) = paramdup::rewrite_source(&source)?;

    if modified == 0 {
        return Ok(None);
    }

    if !dry_run {
        fs::write(file_path, fixed)?;
    }

    Ok(Some(Fix {
        file: file_path.to_path_buf(),
        modified,
    }))
}

fn main() -> Result<()> {
    let start = Instant::now();
    let args = StandardArgs::parse()?;
    let base_dir = args.base_dir();

    let dry_run = std::env::args().any(|arg| arg == "--dry-run");

    // Print compilation directory for Emacs compile-mode
    log!("Entering directory '{}'", base_dir.display());
    log!("");
    if dry_run {
        log!("(DRY RUN MODE)");
        log!("");
    }

    let search_dirs = args.get_search_dirs();
    let files = find_rust_files(&search_dirs);

    // One file's rewrite never depends on another, so fix in parallel
    // and sum the counts afterwards
    let results: Vec<_> = files
        .par_iter()
        .map(|file| (file.clone(), fix_file(file, dry_run)))
        .collect();

    let mut all_fixes = Vec::new();
    for (file, result) in results {
        match result {
            Ok(Some(fix)) => all_fixes.push(fix),
            Ok(None) => {}
            Err(e) => {
                // Skip files that fail to parse
                eprintln!("Warning: Failed to process {}: {}", file.display(), e);
            }
        }
    }

    let total_modified: usize = all_fixes.iter().map(|fix| fix.modified).sum();

    if all_fixes.is_empty() {
        log!("✓ No single-parameter fn declarations found");
    } else {
        log!("✓ Duplicated parameters in {} file(s):", format_number(all_fixes.len()));
        log!("");
        for fix in &all_fixes {
            // Use relative path from base_dir (Emacs will use compilation directory)
            if let Ok(rel_path) = fix.file.strip_prefix(&base_dir) {
                log!("{}: {} declaration(s)", rel_path.display(), format_number(fix.modified));
            } else {
                log!("{}: {} declaration(s)", fix.file.display(), format_number(fix.modified));
            }
        }
        log!("");
        log!("Summary: {} files checked, {} files modified, {} declarations updated",
            format_number(files.len()),
            format_number(all_fixes.len()),
            format_number(total_modified));
    }

    log!("Completed in {}ms", start.elapsed().as_millis());
    Ok(())
}
