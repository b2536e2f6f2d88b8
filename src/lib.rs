// Copyright (C) Brian G. Milnes 2025

//! Paramdup - AST-based duplication of single function parameters
//!
//! This library locates every fn declaration with exactly one named
//! parameter and rewrites it to take two, synthesizing a fresh name for
//! the duplicate. All other code, comments and whitespace included, is
//! left byte-for-byte unchanged.

pub mod parser;
pub mod suggest;
pub mod rewriter;
pub mod analyzer;
pub mod args;
pub mod ast_utils;
pub mod logging;

use anyhow::Result;
use std::path::Path;

// Re-export commonly used items
pub use parser::parser::parse_file;
pub use suggest::suggest::suggest_name;
pub use rewriter::rewriter::{duplicate_params, rewrite_source, sole_named_param, RewriteResult};
pub use analyzer::analyzer::{analyze, Issue, IssueKind, Severity};
pub use args::args::{find_rust_files, format_number, get_search_dirs, StandardArgs};
pub use ast_utils::ast_utils::*;

/// Review a Rust file and report every duplication candidate
pub fn review(file: &Path, format: &str) -> Result<()> {
    let source = std::fs::read_to_string(file)?;
    let syntax = parse_file(&source)?;

    let issues = analyze(&syntax)?;

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&issues)?;
            println!("{json}");
        }
        _ => {
            if issues.is_empty() {
                println!("✓ No single-parameter functions found");
            } else {
                println!("Found {} candidate(s):", issues.len());
                for issue in issues {
                    println!("  - {issue}");
                }
            }
        }
    }

    Ok(())
}

/// Duplicate single parameters in a Rust file, returning how many fn
/// declarations changed
pub fn fix_file(file: &Path, in_place: bool) -> Result<usize> {
    let source = std::fs::read_to_string(file)?;
    let (fixed_code, modified) = rewrite_source(&source)?;

    if in_place {
        if modified > 0 {
            std::fs::write(file, fixed_code)?;
        }
        println!(
            "Modified {modified} declaration(s) in {}",
            file.display()
        );
    } else {
        print!("{fixed_code}");
    }

    Ok(modified)
}

/// Parse a Rust file and summarize its fn declarations
pub fn parse(file: &Path) -> Result<()> {
    let source = std::fs::read_to_string(file)?;
    let syntax = parse_file(&source)?;

    let issues = analyze(&syntax)?;
    let eligible = issues
        .iter()
        .filter(|issue| issue.kind == IssueKind::SingleParameter)
        .count();

    println!("{eligible} fn declaration(s) eligible for duplication");
    for issue in &issues {
        println!("  line {}: {}", issue.line, issue.message);
    }

    Ok(())
}
