// src/generate/mod.rs
//! Code generation front end: cache -> retry -> backend.

pub mod backend;
pub mod cache;
pub mod retry;

use crate::config::Config;
use crate::error::Result;
use cache::PromptCache;
use retry::RetryPolicy;

pub use backend::{GenerationBackend, OpenAiBackend};

pub struct Generator {
    backend: Box<dyn GenerationBackend>,
    cache: PromptCache,
    policy: RetryPolicy,
}

impl Generator {
    #[must_use]
    pub fn new(backend: Box<dyn GenerationBackend>, config: &Config) -> Self {
        Self {
            backend,
            cache: PromptCache::new(config.cache_capacity),
            policy: config.retry.clone(),
        }
    }

    /// Generates code for `prompt`, serving repeats from the cache.
    ///
    /// The cache is keyed by the raw prompt; the backend receives the
    /// preprocessed form. Failed generations are never cached.
    ///
    /// # Errors
    ///
    /// Returns the final backend error after retries are exhausted.
    pub fn generate(&mut self, prompt: &str) -> Result<String> {
        if let Some(hit) = self.cache.get(prompt) {
            return Ok(hit.to_string());
        }

        let wrapped = preprocess(prompt);
        let text = retry::with_backoff(&self.policy, || self.backend.generate(&wrapped))?;

        self.cache.insert(prompt.to_string(), text.clone());
        Ok(text)
    }
}

fn preprocess(prompt: &str) -> String {
    format!(
        "Create a highly optimized and well-documented implementation with:\n\
         - Type hints\n\
         - Error handling\n\
         - Performance considerations\n\
         - Unit tests\n\n\
         Original prompt: {prompt}"
    )
}
