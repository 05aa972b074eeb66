// tests/unit_generate.rs
use genvet_core::config::Config;
use genvet_core::error::{Result, VetError};
use genvet_core::generate::cache::PromptCache;
use genvet_core::generate::retry::{with_backoff, RetryPolicy};
use genvet_core::generate::{GenerationBackend, Generator};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Backend that fails a fixed number of times, then echoes the prompt.
struct FlakyBackend {
    calls: Arc<AtomicU32>,
    failures: u32,
}

impl GenerationBackend for FlakyBackend {
    fn generate(&self, prompt: &str) -> Result<String> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if call <= self.failures {
            return Err(VetError::Backend(format!("transient failure {call}")));
        }
        Ok(format!("# generated for: {prompt}"))
    }
}

fn fast_policy(max_attempts: u32) -> RetryPolicy {
    RetryPolicy {
        max_attempts,
        base_delay_ms: 0,
        backoff_multiplier: 2.0,
    }
}

fn test_config(max_attempts: u32) -> Config {
    Config {
        retry: fast_policy(max_attempts),
        ..Config::default()
    }
}

// --- retry ---

#[test]
fn backoff_delays_double_per_attempt() {
    let policy = RetryPolicy::default();
    assert_eq!(policy.backoff_delay(1), Duration::from_millis(1000));
    assert_eq!(policy.backoff_delay(2), Duration::from_millis(2000));
    assert_eq!(policy.backoff_delay(3), Duration::from_millis(4000));
}

#[test]
fn with_backoff_recovers_from_transient_failures() {
    let calls = Arc::new(AtomicU32::new(0));
    let backend = FlakyBackend {
        calls: calls.clone(),
        failures: 2,
    };
    let result = with_backoff(&fast_policy(3), || backend.generate("p"));
    assert!(result.is_ok());
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[test]
fn with_backoff_returns_last_error_when_exhausted() {
    let calls = Arc::new(AtomicU32::new(0));
    let backend = FlakyBackend {
        calls: calls.clone(),
        failures: 10,
    };
    let result = with_backoff(&fast_policy(3), || backend.generate("p"));
    match result {
        Err(VetError::Backend(msg)) => assert_eq!(msg, "transient failure 3"),
        other => panic!("expected backend error, got {other:?}"),
    }
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[test]
fn with_backoff_success_short_circuits() {
    let calls = Arc::new(AtomicU32::new(0));
    let backend = FlakyBackend {
        calls: calls.clone(),
        failures: 0,
    };
    let result = with_backoff(&fast_policy(3), || backend.generate("p"));
    assert!(result.is_ok());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

// --- cache ---

#[test]
fn cache_hit_returns_stored_value() {
    let mut cache = PromptCache::new(4);
    cache.insert("a".into(), "1".into());
    assert_eq!(cache.get("a"), Some("1"));
    assert_eq!(cache.get("b"), None);
}

#[test]
fn cache_evicts_least_recently_used() {
    let mut cache = PromptCache::new(2);
    cache.insert("a".into(), "1".into());
    cache.insert("b".into(), "2".into());
    // Touch "a" so "b" becomes the eviction candidate.
    assert!(cache.get("a").is_some());
    cache.insert("c".into(), "3".into());

    assert_eq!(cache.len(), 2);
    assert!(cache.get("a").is_some());
    assert!(cache.get("b").is_none());
    assert!(cache.get("c").is_some());
}

#[test]
fn cache_reinsert_updates_value_without_growing() {
    let mut cache = PromptCache::new(2);
    cache.insert("a".into(), "1".into());
    cache.insert("a".into(), "2".into());
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get("a"), Some("2"));
}

#[test]
fn zero_capacity_disables_caching() {
    let mut cache = PromptCache::new(0);
    cache.insert("a".into(), "1".into());
    assert!(cache.is_empty());
    assert_eq!(cache.get("a"), None);
}

// --- generator ---

#[test]
fn generator_serves_repeat_prompts_from_cache() {
    let calls = Arc::new(AtomicU32::new(0));
    let backend = FlakyBackend {
        calls: calls.clone(),
        failures: 0,
    };
    let mut generator = Generator::new(Box::new(backend), &test_config(1));

    let first = generator.generate("fibonacci").unwrap();
    let second = generator.generate("fibonacci").unwrap();
    assert_eq!(first, second);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    generator.generate("primes").unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn generator_does_not_cache_failures() {
    let calls = Arc::new(AtomicU32::new(0));
    let backend = FlakyBackend {
        calls: calls.clone(),
        failures: 1,
    };
    let mut generator = Generator::new(Box::new(backend), &test_config(1));

    assert!(generator.generate("p").is_err());
    // Second call reaches the backend again and succeeds.
    assert!(generator.generate("p").is_ok());
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
