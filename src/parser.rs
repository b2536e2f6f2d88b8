// Copyright (C) Brian G. Milnes 2025

//! Parser module wrapping ra_ap_syntax
//!
//! Produces the lossless syntax tree the rewriter operates on. Sources
//! that fail to parse are rejected here, never partially rewritten.

pub mod parser {
    use anyhow::Result;
    use ra_ap_syntax::{Edition, SourceFile};

    /// Parse Rust source text into a syntax tree
    pub fn parse_file(source: &str) -> Result<SourceFile> {
        let parsed = SourceFile::parse(source, Edition::Edition2021);

        if !parsed.errors().is_empty() {
            return Err(anyhow::anyhow!("Parse errors: {:?}", parsed.errors()));
        }

        Ok(parsed.tree())
    }
}
