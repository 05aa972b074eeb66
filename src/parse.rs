// src/parse.rs
//! Python front end: turns source text into a syntax tree or a typed error.
//!
//! tree-sitter is error-tolerant, so "cannot be parsed" is defined as the
//! produced tree containing ERROR or MISSING nodes. Trees deeper than
//! [`MAX_TREE_DEPTH`] are rejected up front so every analysis downstream
//! stays a total function over the trees it accepts.

use crate::analysis::walk;
use crate::error::{Result, VetError};
use tree_sitter::{Node, Parser, Tree};

/// Hard cap on syntax tree depth. Pathologically nested input fails with
/// `VetError::TreeTooDeep` instead of risking runaway traversal cost.
pub const MAX_TREE_DEPTH: usize = 512;

/// Parses `source` as Python.
///
/// # Errors
///
/// Returns `VetError::Grammar` if the grammar cannot be loaded,
/// `VetError::Parse` if the source is not valid Python, and
/// `VetError::TreeTooDeep` if the tree exceeds [`MAX_TREE_DEPTH`].
pub fn parse(source: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .map_err(|e| VetError::Grammar(e.to_string()))?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| VetError::Grammar("parser produced no tree".into()))?;

    let root = tree.root_node();
    if root.has_error() {
        return Err(VetError::Parse {
            line: first_error_line(root),
            message: "source is not valid Python".into(),
        });
    }

    let depth = walk::max_tree_depth(root);
    if depth > MAX_TREE_DEPTH {
        return Err(VetError::TreeTooDeep {
            depth,
            limit: MAX_TREE_DEPTH,
        });
    }

    Ok(tree)
}

fn first_error_line(root: Node) -> usize {
    walk::preorder(root)
        .find(|n| n.is_error() || n.is_missing())
        .map_or(1, |n| n.start_position().row + 1)
}
