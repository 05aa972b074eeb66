// src/analysis/complexity.rs
//! Heuristic complexity weight.
//!
//! This is explicitly *not* cyclomatic complexity or any standard metric.
//! Every conditional and loop node adds 1; every function definition adds
//! the named-node count of its whole subtree as a size proxy. The result is
//! non-negative and never decreases when branches, loops, or function
//! definitions are added.

use super::walk;
use tree_sitter::Node;

fn is_branch_or_loop(kind: &str) -> bool {
    matches!(
        kind,
        "if_statement" | "elif_clause" | "for_statement" | "while_statement"
    )
}

#[must_use]
pub fn score(root: Node) -> f64 {
    let mut total = 0usize;
    for node in walk::preorder(root) {
        let kind = node.kind();
        if is_branch_or_loop(kind) {
            total += 1;
        } else if kind == "function_definition" {
            total += walk::named_subtree_size(node);
        }
    }
    total as f64
}
