// src/generate/backend.rs
//! Generation backends.
//!
//! [`GenerationBackend`] is the single seam the rest of the system depends
//! on: one capability, prompt in, code out. [`OpenAiBackend`] implements it
//! against any OpenAI-compatible chat-completions endpoint.

use crate::config::Config;
use crate::error::{Result, VetError};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
const HTTP_REQUEST_TIMEOUT_SECS: u64 = 120;

const SYSTEM_PROMPT: &str = "You are an expert programmer.";
const TEMPERATURE: f64 = 0.2;
const MAX_TOKENS: u32 = 2000;

pub trait GenerationBackend: Send + Sync {
    /// Generates code text for a prompt.
    ///
    /// # Errors
    ///
    /// Returns a backend-specific error on transport or service failure.
    fn generate(&self, prompt: &str) -> Result<String>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

pub struct OpenAiBackend {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl OpenAiBackend {
    /// Builds a backend from config, reading the key from `OPENAI_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns `VetError::MissingApiKey` if the variable is unset and
    /// `VetError::Http` if the client cannot be constructed.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key =
            std::env::var("OPENAI_API_KEY").map_err(|_| VetError::MissingApiKey)?;
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(HTTP_CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS))
            .user_agent("genvet")
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            api_key,
        })
    }
}

impl GenerationBackend for OpenAiBackend {
    fn generate(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(VetError::Backend(format!(
                "HTTP {} - {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown")
            )));
        }

        let body: ChatResponse = response.json()?;
        body.choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| VetError::Backend("response contained no choices".into()))
    }
}
