// src/reporting.rs
//! Console and JSON output for vetting reports.

use crate::error::Result;
use crate::types::{AnalysisResult, Severity};
use colored::Colorize;

/// Prints the full report in terminal form.
pub fn print_report(result: &AnalysisResult) {
    println!("{}", "Code Analysis".bold().underline());
    println!("Complexity Score:   {:.1}", result.complexity_score);
    println!("Code Quality Score: {:.1}", result.code_quality_score);

    println!("\n{}", "Security Issues".bold());
    if result.is_clean() {
        println!("  {}", "none".green());
    }
    for issue in &result.security_issues {
        let tag = severity_tag(issue.severity);
        println!("  {tag} {} (line {})", issue.description, issue.location);
    }

    println!("\n{}", "Performance".bold());
    println!(
        "  Time Complexity:  {}",
        result.performance.time_complexity
    );
    println!(
        "  Space Complexity: {}",
        result.performance.space_complexity
    );
    for suggestion in &result.performance.optimization_suggestions {
        println!("  {} {suggestion}", "-".dimmed());
    }

    if !result.suggestions.is_empty() {
        println!("\n{}", "Suggestions".bold());
        for suggestion in &result.suggestions {
            println!("  {} {suggestion}", "-".dimmed());
        }
    }

    println!(
        "\n{} {:.4}s, {:+.2} MB",
        "measured:".dimmed(),
        result.performance.execution_time,
        result.performance.memory_usage
    );
}

/// Prints the report as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn print_json(result: &AnalysisResult) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

fn severity_tag(severity: Severity) -> colored::ColoredString {
    match severity {
        Severity::High => "HIGH".red().bold(),
        Severity::Medium => "MEDIUM".yellow().bold(),
        Severity::Low => "LOW".blue(),
    }
}
