// Copyright (C) Brian G. Milnes 2025

//! AST traversal utilities
//!
//! Common helpers for walking and querying the syntax tree

pub mod ast_utils {
    use ra_ap_syntax::{SyntaxKind, SyntaxNode, WalkEvent};

    /// Find all nodes of a specific kind in the syntax tree
    pub fn find_nodes(root: &SyntaxNode, kind: SyntaxKind) -> Vec<SyntaxNode> {
        let mut results = Vec::new();

        for event in root.preorder() {
            if let WalkEvent::Enter(node) = event {
                if node.kind() == kind {
                    results.push(node);
                }
            }
        }

        results
    }

    /// Get the line number of a byte offset (1-indexed)
    pub fn line_number(source: &str, offset: usize) -> usize {
        source[..offset].bytes().filter(|&b| b == b'\n').count() + 1
    }
}
