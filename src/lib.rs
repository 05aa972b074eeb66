pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod instrument;
pub mod parse;
pub mod reporting;
pub mod types;
