// src/cli.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "genvet", version, about = "Static vetting for generated code")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a Python source file (reads stdin when FILE is omitted)
    Analyze {
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
        /// Emit the report as JSON instead of terminal output
        #[arg(long)]
        json: bool,
    },
    /// Generate code from a prompt, then vet the result
    Generate {
        prompt: String,
        /// Print the generated code without analyzing it
        #[arg(long)]
        no_vet: bool,
        /// Emit the report as JSON instead of terminal output
        #[arg(long)]
        json: bool,
    },
}
