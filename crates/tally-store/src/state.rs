//! Counter state
//!
//! State values are immutable once built. Successive states share every
//! untouched [`Counter`] through its `Arc`, so consumers can compare
//! counters with [`Arc::ptr_eq`] instead of by value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Opaque, unique identifier of a counter
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CounterId(String);

impl CounterId {
    /// Generate a fresh random id (UUID v4, 128 bits)
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CounterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CounterId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for CounterId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&CounterId> for CounterId {
    fn from(value: &CounterId) -> Self {
        value.clone()
    }
}

/// A single counter record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    pub id: CounterId,
    pub count: i64,
}

impl Counter {
    /// Create a counter starting at zero
    pub fn new(id: CounterId) -> Self {
        Self { id, count: 0 }
    }

    /// Copy of this counter with a different count
    pub fn with_count(&self, count: i64) -> Self {
        Self {
            id: self.id.clone(),
            count,
        }
    }
}

/// Application state: an ordered sequence of counters with unique ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub counters: Vec<Arc<Counter>>,
}

impl Default for AppState {
    /// Exactly one counter with a fresh id and a count of zero
    fn default() -> Self {
        Self {
            counters: vec![Arc::new(Counter::new(CounterId::generate()))],
        }
    }
}

impl AppState {
    /// Build a state with one freshly identified counter per initial count
    pub fn from_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        let counters = counts
            .into_iter()
            .map(|count| Arc::new(Counter::new(CounterId::generate()).with_count(count)))
            .collect();
        Self { counters }
    }

    pub fn find(&self, id: &CounterId) -> Option<&Arc<Counter>> {
        self.counters.iter().find(|counter| &counter.id == id)
    }

    pub fn contains(&self, id: &CounterId) -> bool {
        self.find(id).is_some()
    }

    /// Counter at a zero-based position
    pub fn counter_at(&self, index: usize) -> Option<&Arc<Counter>> {
        self.counters.get(index)
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }
}
