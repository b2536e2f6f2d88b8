// Copyright (C) Brian G. Milnes 2025

//! Parameter duplication rewriter
//!
//! Walks a parsed file, finds every fn whose parameter list holds exactly
//! one named parameter, and splices in a duplicate of that parameter under
//! a suggested name. Replacement happens at the green-tree level, so the
//! input tree is never mutated and untouched subtrees are shared between
//! the old and new roots. Everything outside the rewritten parameter
//! lists, comments and whitespace included, is emitted byte-for-byte.

pub mod rewriter {
    use anyhow::Result;
    use ra_ap_syntax::{
        ast::{self, AstNode, HasName},
        SourceFile, SyntaxKind, SyntaxNode, TextRange,
    };

    use crate::parse_file;
    use crate::suggest::suggest::suggest_name;

    /// Outcome of one rewrite pass
    pub struct RewriteResult {
        /// The new tree; shares every untouched subtree with the input
        pub tree: SourceFile,
        /// How many fn declarations gained a parameter
        pub modified: usize,
    }

    /// A planned parameter-list replacement, located by the list's range
    /// in the original tree
    struct Edit {
        range: TextRange,
        new_text: String,
    }

    /// Duplicate the sole parameter of every eligible fn in the tree.
    ///
    /// Each fn node is considered exactly once; rewrites are independent
    /// of each other, so traversal order cannot change the result.
    pub fn duplicate_params(tree: &SourceFile) -> Result<RewriteResult> {
        let mut edits: Vec<Edit> = Vec::new();

        for node in tree.syntax().descendants() {
            if node.kind() != SyntaxKind::FN {
                continue;
            }
            if let Some(fn_ast) = ast::Fn::cast(node) {
                if let Some(edit) = plan_edit(&fn_ast) {
                    // A parameter list can nest inside another one (an fn
                    // item in a const-generic block); the outer rewrite
                    // carries the inner text verbatim, so the nested edit
                    // is dropped. Preorder visits the outer list first.
                    if edits.iter().any(|e| e.range.contains_range(edit.range)) {
                        continue;
                    }
                    edits.push(edit);
                }
            }
        }

        // Apply bottom-up: an edit never shifts the ranges before it, so
        // every remaining range stays valid in each intermediate root.
        edits.sort_by(|a, b| b.range.start().cmp(&a.range.start()));

        let modified = edits.len();
        let mut root = tree.syntax().clone();

        for edit in &edits {
            let target = match param_list_at(&root, edit.range) {
                Some(node) => node,
                None => {
                    return Err(anyhow::anyhow!(
                        "lost a parameter list at {:?} during rewrite",
                        edit.range
                    ))
                }
            };
            let replacement = parse_param_list(&edit.new_text)?;
            let green = replacement.syntax().green().into_owned();
            root = SyntaxNode::new_root(target.replace_with(green));
        }

        match SourceFile::cast(root) {
            Some(tree) => Ok(RewriteResult { tree, modified }),
            None => Err(anyhow::anyhow!("rewrite did not produce a source file")),
        }
    }

    /// Parse, rewrite, and emit in one step
    pub fn rewrite_source(source: &str) -> Result<(String, usize)> {
        let tree = parse_file(source)?;
        let result = duplicate_params(&tree)?;
        Ok((result.tree.syntax().to_string(), result.modified))
    }

    /// The sole named parameter of a fn, when the fn is eligible.
    ///
    /// A `self` receiver is not a formal parameter and does not count.
    /// A sole parameter bound by anything other than a plain identifier
    /// (`_`, destructuring, variadic `...`) has no name to derive a
    /// suggestion from, so the fn is not eligible.
    pub fn sole_named_param(fn_ast: &ast::Fn) -> Option<(ast::Param, String)> {
        let list = fn_ast.param_list()?;
        let mut params = list.params();
        let param = params.next()?;
        if params.next().is_some() {
            return None;
        }
        let name = param_ident(&param)?;
        Some((param, name.text().to_string()))
    }

    fn param_ident(param: &ast::Param) -> Option<ast::Name> {
        match param.pat()? {
            ast::Pat::IdentPat(ident) => ident.name(),
            _ => None,
        }
    }

    /// Build the replacement parameter-list text for an eligible fn: the
    /// original list with `, <duplicate>` spliced in right after the sole
    /// parameter. The duplicate is the parameter's own token text with
    /// only the identifier swapped, so binding modifiers, attributes and
    /// the type are carried over verbatim.
    fn plan_edit(fn_ast: &ast::Fn) -> Option<Edit> {
        let (param, name) = sole_named_param(fn_ast)?;
        let list = fn_ast.param_list()?;

        let list_range = list.syntax().text_range();
        let list_text = list.syntax().text().to_string();
        let param_range = param.syntax().text_range();
        let param_text = param.syntax().text().to_string();
        let ident_range = param_ident(&param)?.syntax().text_range();

        let param_start: usize = param_range.start().into();
        let ident_start: usize = ident_range.start().into();
        let ident_end: usize = ident_range.end().into();

        let new_name = suggest_name(&name);
        let mut duplicate = String::with_capacity(param_text.len() + new_name.len());
        duplicate.push_str(&param_text[..ident_start - param_start]);
        duplicate.push_str(&new_name);
        duplicate.push_str(&param_text[ident_end - param_start..]);

        let list_start: usize = list_range.start().into();
        let param_end: usize = param_range.end().into();
        let insert_at = param_end - list_start;

        let mut new_text = String::with_capacity(list_text.len() + duplicate.len() + 2);
        new_text.push_str(&list_text[..insert_at]);
        new_text.push_str(", ");
        new_text.push_str(&duplicate);
        new_text.push_str(&list_text[insert_at..]);

        Some(Edit {
            range: list_range,
            new_text,
        })
    }

    /// Find the parameter-list node occupying exactly `range`
    fn param_list_at(root: &SyntaxNode, range: TextRange) -> Option<SyntaxNode> {
        let node = match root.covering_element(range) {
            rowan::NodeOrToken::Node(node) => node,
            rowan::NodeOrToken::Token(token) => token.parent()?,
        };
        node.ancestors()
            .find(|n| n.kind() == SyntaxKind::PARAM_LIST && n.text_range() == range)
    }

    /// Parse a parameter-list fragment by wrapping it in a stub method.
    /// The impl context keeps a carried-over `self` receiver parseable.
    fn parse_param_list(text: &str) -> Result<ast::ParamList> {
        let stub = format!("impl Stub {{ fn stub{text} {{}} }}");
        let tree = parse_file(&stub)?;
        tree.syntax()
            .descendants()
            .find(|node| node.kind() == SyntaxKind::PARAM_LIST)
            .and_then(ast::ParamList::cast)
            .ok_or_else(|| anyhow::anyhow!("no parameter list in rebuilt fragment"))
    }
}
