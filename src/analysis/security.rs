// src/analysis/security.rs
//! Dangerous-call scanner.
//!
//! Flags direct calls to a fixed set of dangerous identifiers. The table is
//! an explicit, immutable value owned by the scanner, not global state.
//!
//! Known limitation, kept deliberately: only calls whose callee is a plain
//! identifier are flagged. A dangerous function reached through attribute
//! access (`module.eval(...)`, `obj.exec(...)`) is never reported, even when
//! it resolves to the same function. This is a detection-coverage boundary
//! of the identifier-table approach, not something to paper over.

use super::walk;
use crate::types::{SecurityIssue, Severity};
use chrono::Utc;
use tree_sitter::Node;

/// Dangerous identifier -> severity. Two High, two Medium.
const SEVERITY_TABLE: [(&str, Severity); 4] = [
    ("eval", Severity::High),
    ("exec", Severity::High),
    ("__import__", Severity::Medium),
    ("subprocess", Severity::Medium),
];

pub struct SecurityScanner {
    table: &'static [(&'static str, Severity)],
}

impl Default for SecurityScanner {
    fn default() -> Self {
        Self {
            table: &SEVERITY_TABLE,
        }
    }
}

impl SecurityScanner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans the tree in pre-order and emits one issue per matched call.
    /// Emission order follows the traversal, so issues come out in
    /// ascending source position with outer calls before their arguments.
    #[must_use]
    pub fn scan(&self, root: Node, source: &str) -> Vec<SecurityIssue> {
        let mut issues = Vec::new();
        for node in walk::preorder(root) {
            if node.kind() != "call" {
                continue;
            }
            let Some(callee) = node.child_by_field_name("function") else {
                continue;
            };
            // Attribute access (`x.eval`) has kind "attribute" and is skipped.
            if callee.kind() != "identifier" {
                continue;
            }
            let Ok(name) = callee.utf8_text(source.as_bytes()) else {
                continue;
            };
            if let Some(severity) = self.severity_of(name) {
                issues.push(SecurityIssue {
                    severity,
                    description: format!("Dangerous function '{name}' detected"),
                    location: node.start_position().row + 1,
                    detected_at: Utc::now(),
                });
            }
        }
        issues
    }

    fn severity_of(&self, name: &str) -> Option<Severity> {
        self.table
            .iter()
            .find(|(ident, _)| *ident == name)
            .map(|(_, sev)| *sev)
    }
}
