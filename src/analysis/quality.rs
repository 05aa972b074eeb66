// src/analysis/quality.rs
//! Quality score from tree shape.
//!
//! Deterministic heuristic, monotonic in the signals it uses: starting from
//! 100, each function without a docstring costs 15, each function whose name
//! is not snake_case costs 10, and each nesting level beyond 2 costs 10.
//! The result is clamped to [0, 100]. Adding a docstring, fixing a name, or
//! flattening nesting can only raise the score.

use super::walk;
use regex::Regex;
use std::sync::OnceLock;
use tree_sitter::Node;

const SNAKE_CASE: &str = r"^[a-z_][a-z0-9_]*$";

fn snake_case_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SNAKE_CASE).expect("snake_case pattern is a valid regex"))
}

const UNDOCUMENTED_PENALTY: f64 = 15.0;
const NAMING_PENALTY: f64 = 10.0;
const NESTING_PENALTY: f64 = 10.0;
const NESTING_ALLOWANCE: usize = 2;

fn is_nesting_construct(kind: &str) -> bool {
    matches!(
        kind,
        "if_statement" | "elif_clause" | "for_statement" | "while_statement"
    )
}

#[must_use]
pub fn score(root: Node, source: &str) -> f64 {
    let snake = snake_case_re();
    let mut score = 100.0;

    for node in walk::preorder(root) {
        if node.kind() != "function_definition" {
            continue;
        }
        if !has_docstring(node) {
            score -= UNDOCUMENTED_PENALTY;
        }
        if let Some(name) = function_name(node, source) {
            if !snake.is_match(name) {
                score -= NAMING_PENALTY;
            }
        }
    }

    let nesting = walk::max_nesting_depth(root, is_nesting_construct);
    score -= NESTING_PENALTY * nesting.saturating_sub(NESTING_ALLOWANCE) as f64;

    score.clamp(0.0, 100.0)
}

fn function_name<'a>(node: Node, source: &'a str) -> Option<&'a str> {
    node.child_by_field_name("name")
        .and_then(|n| n.utf8_text(source.as_bytes()).ok())
}

/// A function is documented when the first statement of its body is a
/// bare string expression.
pub(crate) fn has_docstring(func: Node) -> bool {
    let Some(body) = func.child_by_field_name("body") else {
        return false;
    };
    let Some(first) = body.named_child(0) else {
        return false;
    };
    first.kind() == "expression_statement"
        && first.named_child(0).is_some_and(|n| n.kind() == "string")
}
