// src/analysis/walk.rs
//! Shared tree traversal.
//!
//! All analyses walk the tree in depth-first **pre-order**: a node is
//! visited before its children, children left to right. This order is
//! load-bearing — it fixes the emission order of security issues — and is
//! implemented iteratively (cursor loop or explicit stack, never recursion)
//! so deeply nested input cannot exhaust the call stack.

use tree_sitter::{Node, TreeCursor};

/// Iterator over `root` and all of its descendants in pre-order.
pub struct Preorder<'a> {
    cursor: TreeCursor<'a>,
    done: bool,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = Node<'a>;

    fn next(&mut self) -> Option<Node<'a>> {
        if self.done {
            return None;
        }
        let node = self.cursor.node();
        if !self.cursor.goto_first_child() {
            loop {
                if self.cursor.goto_next_sibling() {
                    break;
                }
                if !self.cursor.goto_parent() {
                    self.done = true;
                    break;
                }
            }
        }
        Some(node)
    }
}

#[must_use]
pub fn preorder(root: Node) -> Preorder {
    Preorder {
        cursor: root.walk(),
        done: false,
    }
}

/// Depth of the deepest node below `root`, with `root` itself at depth 0.
#[must_use]
pub fn max_tree_depth(root: Node) -> usize {
    let mut cursor = root.walk();
    let mut depth = 0usize;
    let mut max = 0usize;
    loop {
        if cursor.goto_first_child() {
            depth += 1;
            max = max.max(depth);
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return max;
            }
            depth -= 1;
        }
    }
}

/// Maximum count of nodes matching `is_nesting` that enclose one another
/// anywhere under `root`. 0 means no matching node exists. The walk descends
/// through every node but only matching nodes increase the depth, so a loop
/// buried inside a function body still counts from that loop outward.
#[must_use]
pub fn max_nesting_depth(root: Node, is_nesting: fn(&str) -> bool) -> usize {
    let mut max = 0usize;
    let mut stack = vec![(root, 0usize)];
    while let Some((node, enclosing)) = stack.pop() {
        let depth = if is_nesting(node.kind()) {
            enclosing + 1
        } else {
            enclosing
        };
        max = max.max(depth);
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            stack.push((child, depth));
        }
    }
    max
}

/// Count of named nodes in the subtree rooted at `node`, including `node`.
#[must_use]
pub fn named_subtree_size(node: Node) -> usize {
    preorder(node).filter(Node::is_named).count()
}
