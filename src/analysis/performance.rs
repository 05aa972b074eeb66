// src/analysis/performance.rs
//! Performance estimation from tree shape.
//!
//! Time complexity is a pure function of maximum loop-nesting depth:
//! depth 0 -> O(1), depth 1 -> O(n), depth >= 2 -> O(n²). The classifier
//! does not distinguish depth 2 from deeper nesting; the O(n²) ceiling is a
//! deliberate simplification of the heuristic.
//!
//! Space complexity is estimated from allocating constructs (list/dict/set/
//! tuple literals and comprehensions): one inside a loop at depth >= 2 maps
//! to O(n²), inside any loop to O(n), otherwise O(1).
//!
//! `memory_usage` and `execution_time` are left at zero here; the
//! instrumentation wrapper around the orchestrator fills them.

use super::walk;
use crate::types::{ComplexityClass, PerformanceMetrics};
use tree_sitter::Node;

pub(crate) fn is_loop(kind: &str) -> bool {
    matches!(kind, "for_statement" | "while_statement")
}

fn is_allocating(kind: &str) -> bool {
    matches!(
        kind,
        "list"
            | "dictionary"
            | "set"
            | "tuple"
            | "list_comprehension"
            | "dictionary_comprehension"
            | "set_comprehension"
            | "generator_expression"
    )
}

#[must_use]
pub fn estimate(root: Node, source: &str) -> PerformanceMetrics {
    let loop_depth = walk::max_nesting_depth(root, is_loop);

    PerformanceMetrics {
        time_complexity: classify_time(loop_depth),
        space_complexity: classify_space(root),
        optimization_suggestions: suggestions(root, source, loop_depth),
        memory_usage: 0.0,
        execution_time: 0.0,
    }
}

/// Maps maximum loop-nesting depth to a time-complexity class.
#[must_use]
pub fn classify_time(loop_depth: usize) -> ComplexityClass {
    match loop_depth {
        0 => ComplexityClass::Constant,
        1 => ComplexityClass::Linear,
        _ => ComplexityClass::Quadratic,
    }
}

fn classify_space(root: Node) -> ComplexityClass {
    // Deepest loop nesting around any allocating construct.
    let mut max_alloc_depth: Option<usize> = None;
    let mut stack = vec![(root, 0usize)];
    while let Some((node, enclosing)) = stack.pop() {
        let depth = if is_loop(node.kind()) {
            enclosing + 1
        } else {
            enclosing
        };
        if is_allocating(node.kind()) {
            max_alloc_depth = Some(max_alloc_depth.map_or(depth, |d| d.max(depth)));
        }
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            stack.push((child, depth));
        }
    }

    match max_alloc_depth {
        Some(d) if d >= 2 => ComplexityClass::Quadratic,
        Some(d) if d == 1 => ComplexityClass::Linear,
        _ => ComplexityClass::Constant,
    }
}

fn suggestions(root: Node, source: &str, loop_depth: usize) -> Vec<String> {
    let mut out = Vec::new();

    if loop_depth >= 2 {
        out.push(
            "Reduce nested loop depth; replace the inner loop with a lookup \
             structure (dict/set) for linear total cost"
                .to_string(),
        );
    }
    if allocation_inside_loop(root) {
        out.push(
            "Hoist collection allocations out of loops or preallocate before \
             iterating"
                .to_string(),
        );
    }
    if has_while_true(root, source) {
        out.push("Ensure 'while True' loops have a reachable exit condition".to_string());
    }

    out
}

fn allocation_inside_loop(root: Node) -> bool {
    let mut stack = vec![(root, false)];
    while let Some((node, in_loop)) = stack.pop() {
        let in_loop = in_loop || is_loop(node.kind());
        if in_loop && is_allocating(node.kind()) {
            return true;
        }
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            stack.push((child, in_loop));
        }
    }
    false
}

fn has_while_true(root: Node, source: &str) -> bool {
    walk::preorder(root).any(|node| {
        node.kind() == "while_statement"
            && node
                .child_by_field_name("condition")
                .and_then(|c| c.utf8_text(source.as_bytes()).ok())
                .is_some_and(|text| text == "True")
    })
}
