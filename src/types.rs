// src/types.rs
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Risk classification attached to a detected dangerous call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Coarse asymptotic growth label for estimated time/space behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComplexityClass {
    #[serde(rename = "O(1)")]
    Constant,
    #[serde(rename = "O(log n)")]
    Logarithmic,
    #[serde(rename = "O(n)")]
    Linear,
    #[serde(rename = "O(n log n)")]
    Linearithmic,
    #[serde(rename = "O(n²)")]
    Quadratic,
}

impl fmt::Display for ComplexityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant => write!(f, "O(1)"),
            Self::Logarithmic => write!(f, "O(log n)"),
            Self::Linear => write!(f, "O(n)"),
            Self::Linearithmic => write!(f, "O(n log n)"),
            Self::Quadratic => write!(f, "O(n²)"),
        }
    }
}

/// A single dangerous call found by the security scanner.
#[derive(Debug, Clone, Serialize)]
pub struct SecurityIssue {
    pub severity: Severity,
    pub description: String,
    /// 1-based source line of the call expression.
    pub location: usize,
    pub detected_at: DateTime<Utc>,
}

/// Estimated performance characteristics of the analyzed snippet.
///
/// `memory_usage` (MB) and `execution_time` (seconds) are zero until the
/// instrumentation wrapper around `analyze` fills them in; the estimator
/// itself never touches them and the complexity classes never depend on them.
#[derive(Debug, Clone, Serialize)]
pub struct PerformanceMetrics {
    pub time_complexity: ComplexityClass,
    pub space_complexity: ComplexityClass,
    pub optimization_suggestions: Vec<String>,
    pub memory_usage: f64,
    pub execution_time: f64,
}

/// Full vetting report for one snippet. Built once per `analyze` call.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub complexity_score: f64,
    pub suggestions: Vec<String>,
    pub security_issues: Vec<SecurityIssue>,
    pub performance: PerformanceMetrics,
    pub code_quality_score: f64,
}

impl AnalysisResult {
    /// Returns true if no security issues were found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.security_issues.is_empty()
    }

    /// Returns true if any issue is High severity.
    #[must_use]
    pub fn has_high_severity(&self) -> bool {
        self.security_issues
            .iter()
            .any(|i| i.severity == Severity::High)
    }
}
