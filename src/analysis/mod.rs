// src/analysis/mod.rs
//! The analysis engine.
//!
//! [`Vetter::analyze`] parses the snippet, then runs the four independent
//! analyses (security, complexity, performance, quality) over the same
//! immutable tree and assembles the report. The analyses share no state and
//! are dispatched onto the rayon pool; join order is irrelevant because
//! their outputs fill independent fields.

pub mod complexity;
pub mod performance;
pub mod quality;
pub mod security;
pub mod walk;

use crate::error::Result;
use crate::parse;
use crate::types::{AnalysisResult, SecurityIssue};
use tree_sitter::Node;

pub use security::SecurityScanner;

/// Branch count above which the report suggests simplifying control flow.
const BRANCH_SUGGESTION_THRESHOLD: usize = 5;

pub struct Vetter {
    scanner: SecurityScanner,
}

impl Default for Vetter {
    fn default() -> Self {
        Self::new()
    }
}

impl Vetter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            scanner: SecurityScanner::new(),
        }
    }

    /// Analyzes one snippet of Python source.
    ///
    /// Idempotent up to `SecurityIssue::detected_at` and the
    /// instrumentation-filled timing/memory fields: issue content and
    /// order, scores, and complexity classes are identical across runs.
    ///
    /// # Errors
    ///
    /// Fails with `VetError::Parse` on malformed source and
    /// `VetError::TreeTooDeep` on pathological nesting; no partial result
    /// is produced and no analysis runs in either case.
    pub fn analyze(&self, source: &str) -> Result<AnalysisResult> {
        let tree = parse::parse(source)?;
        let root = tree.root_node();

        let ((security_issues, complexity_score), (performance, code_quality_score)) = rayon::join(
            || {
                rayon::join(
                    || self.scanner.scan(root, source),
                    || complexity::score(root),
                )
            },
            || {
                rayon::join(
                    || performance::estimate(root, source),
                    || quality::score(root, source),
                )
            },
        );

        let suggestions = general_suggestions(root, &security_issues);

        Ok(AnalysisResult {
            complexity_score,
            suggestions,
            security_issues,
            performance,
            code_quality_score,
        })
    }
}

/// Report-level advisory suggestions, in fixed order: documentation first,
/// then branching, then security remediation.
fn general_suggestions(root: Node, issues: &[SecurityIssue]) -> Vec<String> {
    let mut out = Vec::new();

    let undocumented = walk::preorder(root)
        .filter(|n| n.kind() == "function_definition")
        .any(|f| !quality::has_docstring(f));
    if undocumented {
        out.push("Add docstrings to functions to document intent and usage".to_string());
    }

    let branches = walk::preorder(root)
        .filter(|n| matches!(n.kind(), "if_statement" | "elif_clause"))
        .count();
    if branches > BRANCH_SUGGESTION_THRESHOLD {
        out.push(format!(
            "Heavy branching ({branches} conditionals); consider extracting helpers or a dispatch table"
        ));
    }

    if !issues.is_empty() {
        out.push(
            "Replace dangerous calls (eval/exec/__import__/subprocess) with safe \
             alternatives such as ast.literal_eval or an allowlisted dispatch"
                .to_string(),
        );
    }

    out
}
