// Copyright (C) Brian G. Milnes 2025

//! Review: Report fn declarations with a single parameter
//!
//! Lists every fn declaration the fixer would rewrite, with the name the
//! duplicate parameter would get, without modifying anything.
//!
//! Binary: paramdup-review

use anyhow::Result;
use paramdup::logging::logging::ToolLogger;
use paramdup::{analyze, find_rust_files, format_number, parse_file, IssueKind, StandardArgs};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
struct Candidate {
    file: PathBuf,
    line: usize,
    message: String,
    eligible: bool,
}

fn check_file(file_path: &Path) -> Result<Vec<Candidate>> {
    let content = fs::read_to_string(file_path)?;
    let syntax = parse_file(&content)?;

    let issues = analyze(&syntax)?;
    let candidates = issues
        .into_iter()
        .map(|issue| Candidate {
            file: file_path.to_path_buf(),
            line: issue.line,
            eligible: issue.kind == IssueKind::SingleParameter,
            message: issue.message,
        })
        .collect();

    Ok(candidates)
}

fn main() -> Result<()> {
    let args = StandardArgs::parse()?;
    let base_dir = args.base_dir();
    let mut logger = ToolLogger::new("paramdup-review");

    // Print compilation directory for Emacs compile-mode
    logger.log(&format!("Entering directory '{}'", base_dir.display()));
    logger.log("");

    let search_dirs = args.get_search_dirs();
    let files = find_rust_files(&search_dirs);

    let mut all_candidates = Vec::new();
    for file in &files {
        match check_file(file) {
            Ok(candidates) => all_candidates.extend(candidates),
            Err(e) => {
                // Skip files that fail to parse
                eprintln!("Warning: Failed to parse {}: {}", file.display(), e);
            }
        }
    }

    let eligible = all_candidates.iter().filter(|c| c.eligible).count();

    if all_candidates.is_empty() {
        logger.log("✓ No single-parameter fn declarations found");
    } else {
        logger.log(&format!(
            "Found {} single-parameter fn declaration(s):",
            format_number(all_candidates.len())
        ));
        logger.log("");
        for candidate in &all_candidates {
            // Use relative path from base_dir (Emacs will use compilation directory)
            let path = candidate
                .file
                .strip_prefix(&base_dir)
                .unwrap_or(&candidate.file);
            logger.log(&format!(
                "{}:{}: {}",
                path.display(),
                candidate.line,
                candidate.message
            ));
        }
    }

    logger.finalize(&format!(
        "Summary: {} files checked, {} declarations would be modified",
        format_number(files.len()),
        format_number(eligible)
    ));

    Ok(())
}
