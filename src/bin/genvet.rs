// src/bin/genvet.rs
use std::io::Read;
use std::path::Path;
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use genvet_core::analysis::Vetter;
use genvet_core::cli::{Cli, Commands};
use genvet_core::config::Config;
use genvet_core::generate::{Generator, OpenAiBackend};
use genvet_core::instrument;
use genvet_core::reporting;
use genvet_core::types::AnalysisResult;

/// Exit code when the vet finds High-severity security issues, so
/// pipelines can gate on it.
const EXIT_HIGH_SEVERITY: i32 = 2;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { file, json } => {
            let source = read_source(file.as_deref())?;
            let result = vet(&source)?;
            report(&result, json)?;
            gate(&result);
        }
        Commands::Generate {
            prompt,
            no_vet,
            json,
        } => {
            let backend = OpenAiBackend::from_config(&config)?;
            let mut generator = Generator::new(Box::new(backend), &config);
            let code = generator.generate(&prompt)?;

            println!("{}", "Generated Code".bold().underline());
            println!("{code}\n");

            if !no_vet {
                let result = vet(&code)?;
                report(&result, json)?;
                gate(&result);
            }
        }
    }
    Ok(())
}

/// Runs the analyzer under the instrumentation wrapper and copies the
/// measurement into the report before it reaches the caller.
fn vet(source: &str) -> Result<AnalysisResult> {
    let vetter = Vetter::new();
    let (outcome, measurement) = instrument::measure(|| vetter.analyze(source));
    let mut result = outcome?;
    result.performance.execution_time = measurement.execution_time;
    result.performance.memory_usage = measurement.memory_usage;
    Ok(result)
}

fn report(result: &AnalysisResult, json: bool) -> Result<()> {
    if json {
        reporting::print_json(result)?;
    } else {
        reporting::print_report(result);
    }
    Ok(())
}

fn gate(result: &AnalysisResult) {
    if result.has_high_severity() {
        process::exit(EXIT_HIGH_SEVERITY);
    }
}

fn read_source(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
