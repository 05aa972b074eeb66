// src/generate/retry.rs
//! Explicit retry with exponential backoff.
//!
//! Retry is configuration, not decoration: callers pass a [`RetryPolicy`]
//! and wrap the fallible operation in [`with_backoff`]. Backoff follows
//! base_delay * multiplier^(attempt-1); the last error is returned once
//! attempts are exhausted.

use crate::error::Result;
use colored::Colorize;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay_ms: u64,
    pub backoff_multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 1000,
            backoff_multiplier: 2.0,
        }
    }
}

impl RetryPolicy {
    /// Delay before retrying after the given 1-based failed attempt.
    #[must_use]
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1);
        let factor = self.backoff_multiplier.powi(exponent as i32);
        Duration::from_millis((self.base_delay_ms as f64 * factor) as u64)
    }
}

/// Runs `op` up to `policy.max_attempts` times, sleeping between attempts.
///
/// # Errors
///
/// Returns the error of the final failed attempt.
pub fn with_backoff<T>(policy: &RetryPolicy, mut op: impl FnMut() -> Result<T>) -> Result<T> {
    let attempts = policy.max_attempts.max(1);
    let mut attempt = 1;
    loop {
        match op() {
            Ok(value) => return Ok(value),
            Err(e) if attempt < attempts => {
                eprintln!(
                    "{} attempt {attempt}/{attempts} failed: {e}",
                    "warn:".yellow().bold()
                );
                std::thread::sleep(policy.backoff_delay(attempt));
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
