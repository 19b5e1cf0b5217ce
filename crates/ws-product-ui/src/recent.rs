//! Recent search list.
//!
//! A short FIFO of distinct queries kept per browser. The list itself is
//! plain data; where it lives is behind [`RecentStore`].

use std::cell::RefCell;
use std::collections::VecDeque;
use thiserror::Error;
use tracing::warn;

pub const MAX_RECENT_SEARCHES: usize = 4;

#[derive(Debug, Error)]
pub enum RecentStoreError {
    #[error("stored recent searches are not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("recent search storage unavailable: {0}")]
    Unavailable(String),
}

/// Backing storage for the recent search list.
pub trait RecentStore {
    fn load(&self) -> Result<Vec<String>, RecentStoreError>;
    fn save(&self, entries: &[String]) -> Result<(), RecentStoreError>;
}

/// Keeps entries for the lifetime of the value.
#[derive(Debug, Default)]
pub struct InMemoryRecentStore {
    entries: RefCell<Vec<String>>,
}

impl InMemoryRecentStore {
    pub fn with_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: RefCell::new(entries.into_iter().map(Into::into).collect()),
        }
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }
}

impl RecentStore for InMemoryRecentStore {
    fn load(&self) -> Result<Vec<String>, RecentStoreError> {
        Ok(self.entries.borrow().clone())
    }

    fn save(&self, entries: &[String]) -> Result<(), RecentStoreError> {
        *self.entries.borrow_mut() = entries.to_vec();
        Ok(())
    }
}

/// Bounded, duplicate-free list of past queries, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentSearches {
    entries: VecDeque<String>,
    capacity: usize,
}

impl Default for RecentSearches {
    fn default() -> Self {
        Self::new(MAX_RECENT_SEARCHES)
    }
}

impl RecentSearches {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Rebuild from stored entries, dropping blanks and repeats and keeping
    /// only the newest `capacity`.
    pub fn from_entries<I>(entries: I, capacity: usize) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut list = Self::new(capacity);
        for entry in entries {
            list.record(&entry);
        }
        list
    }

    /// Load from `store`. Unreadable storage yields an empty list.
    pub fn load(store: &dyn RecentStore, capacity: usize) -> Self {
        match store.load() {
            Ok(entries) => Self::from_entries(entries, capacity),
            Err(err) => {
                warn!("ignoring stored recent searches: {}", err);
                Self::new(capacity)
            }
        }
    }

    /// Append `query`. Returns `false` when it was blank or already listed,
    /// in which case the list is untouched.
    pub fn record(&mut self, query: &str) -> bool {
        if self.capacity == 0 || query.trim().is_empty() || self.contains(query) {
            return false;
        }
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(query.to_owned());
        true
    }

    pub fn contains(&self, query: &str) -> bool {
        self.entries.iter().any(|e| e == query)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
