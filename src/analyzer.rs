// Copyright (C) Brian G. Milnes 2025

//! Analyzer module for reporting duplication candidates
//!
//! Read-only counterpart of the rewriter: lists every fn the rewriter
//! would touch, without touching anything.

pub mod analyzer {
    use anyhow::Result;
    use ra_ap_syntax::{
        ast::{self, AstNode, HasName},
        SourceFile, SyntaxKind,
    };
    use serde::{Deserialize, Serialize};

    use crate::ast_utils::ast_utils::{find_nodes, line_number};
    use crate::rewriter::rewriter::sole_named_param;
    use crate::suggest::suggest::suggest_name;

    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct Issue {
        pub kind: IssueKind,
        pub message: String,
        pub severity: Severity,
        pub line: usize,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub enum IssueKind {
        /// A fn with exactly one named parameter; the rewriter would
        /// duplicate it
        SingleParameter,
        /// A fn whose sole parameter has no identifier to derive a
        /// duplicate name from; the rewriter skips it
        UnnamedSingleParameter,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub enum Severity {
        Warning,
        Info,
    }

    impl std::fmt::Display for Issue {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "[{:?}] {:?}: {}", self.severity, self.kind, self.message)
        }
    }

    /// Analyze a parsed file and report every duplication candidate
    pub fn analyze(syntax: &SourceFile) -> Result<Vec<Issue>> {
        let source = syntax.syntax().text().to_string();
        let mut issues = Vec::new();

        for fn_node in find_nodes(syntax.syntax(), SyntaxKind::FN) {
            let fn_ast = match ast::Fn::cast(fn_node) {
                Some(fn_ast) => fn_ast,
                None => continue,
            };
            let fn_name = fn_ast
                .name()
                .map(|name| name.text().to_string())
                .unwrap_or_else(|| "<anonymous>".to_string());
            let offset: usize = fn_ast
                .name()
                .map(|name| name.syntax().text_range().start())
                .unwrap_or_else(|| fn_ast.syntax().text_range().start())
                .into();
            let line = line_number(&source, offset);

            match sole_named_param(&fn_ast) {
                Some((_, param_name)) => {
                    let suggested = suggest_name(&param_name);
                    issues.push(Issue {
                        kind: IssueKind::SingleParameter,
                        message: format!(
                            "fn `{fn_name}` takes a single parameter `{param_name}` \
                             (duplicate would be `{suggested}`)"
                        ),
                        severity: Severity::Info,
                        line,
                    });
                }
                None => {
                    if has_sole_unnamed_param(&fn_ast) {
                        issues.push(Issue {
                            kind: IssueKind::UnnamedSingleParameter,
                            message: format!(
                                "fn `{fn_name}` takes a single parameter with no \
                                 identifier; skipped"
                            ),
                            severity: Severity::Warning,
                            line,
                        });
                    }
                }
            }
        }

        Ok(issues)
    }

    fn has_sole_unnamed_param(fn_ast: &ast::Fn) -> bool {
        let list = match fn_ast.param_list() {
            Some(list) => list,
            None => return false,
        };
        let mut params = list.params();
        let sole = params.next().is_some() && params.next().is_none();
        sole && sole_named_param(fn_ast).is_none()
    }
}
