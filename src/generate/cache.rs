// src/generate/cache.rs
//! Bounded LRU cache for generation results, keyed by the raw prompt.
//!
//! The recency queue holds keys from least to most recently used. A hit
//! moves its key to the back; inserting at capacity evicts the front.
//! Bounding the cache is the point: an unbounded prompt->text map grows
//! with every distinct prompt for the life of the process.

use std::collections::{HashMap, VecDeque};

pub struct PromptCache {
    capacity: usize,
    entries: HashMap<String, String>,
    recency: VecDeque<String>,
}

impl PromptCache {
    /// A capacity of 0 disables caching entirely.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::new(),
            recency: VecDeque::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up `key`, promoting it to most recently used on a hit.
    pub fn get(&mut self, key: &str) -> Option<&str> {
        if !self.entries.contains_key(key) {
            return None;
        }
        self.touch(key);
        self.entries.get(key).map(String::as_str)
    }

    /// Inserts `key` -> `value`, evicting the least recently used entry
    /// when at capacity.
    pub fn insert(&mut self, key: String, value: String) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.contains_key(&key) {
            self.touch(&key);
            self.entries.insert(key, value);
            return;
        }
        if self.entries.len() >= self.capacity {
            if let Some(evicted) = self.recency.pop_front() {
                self.entries.remove(&evicted);
            }
        }
        self.recency.push_back(key.clone());
        self.entries.insert(key, value);
    }

    fn touch(&mut self, key: &str) {
        if let Some(pos) = self.recency.iter().position(|k| k == key) {
            if let Some(k) = self.recency.remove(pos) {
                self.recency.push_back(k);
            }
        }
    }
}
