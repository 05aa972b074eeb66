// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VetError {
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Syntax tree depth {depth} exceeds limit {limit}")]
    TreeTooDeep { depth: usize, limit: usize },

    #[error("Grammar error: {0}")]
    Grammar(String),

    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,

    #[error("Generation backend error: {0}")]
    Backend(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid genvet.toml: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, VetError>;
