//! In-memory TTL cache for upstream responses
//!
//! Provides a `TtlCache` that stores values with an absolute expiry timestamp.
//! Expired entries are evicted lazily, on the next read of the same key; there
//! is no background sweep.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::time::Duration;

/// A cached value together with the moment it stops being fresh
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    /// The cached value
    value: V,
    /// When the entry expires
    expires_at: DateTime<Utc>,
}

impl<V> CacheEntry<V> {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// Outcome of looking a key up, computed while the shard lock is held
enum Lookup<V> {
    Fresh(V),
    Expired,
    Missing,
}

/// Thread-safe key/value store with per-entry expiry
///
/// Entries are never mutated in place: `set` replaces the whole entry, and
/// `get` removes an entry it finds expired. Memory held by keys that expire
/// and are never read again is not reclaimed.
#[derive(Debug)]
pub struct TtlCache<V> {
    entries: DashMap<String, CacheEntry<V>>,
}

impl<V> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> TtlCache<V> {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Number of entries currently held, expired or not
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Clone> TtlCache<V> {
    /// Stores `value` under `key`, overwriting any existing entry
    ///
    /// # Arguments
    /// * `key` - Cache key (e.g. "holidays:2025:UA")
    /// * `value` - The value to cache
    /// * `ttl` - How long the entry is considered fresh
    pub fn set(&self, key: impl Into<String>, value: V, ttl: Duration) {
        let ttl = chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::MAX);
        let expires_at = Utc::now()
            .checked_add_signed(ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        self.entries
            .insert(key.into(), CacheEntry { value, expires_at });
    }

    /// Reads the value stored under `key`
    ///
    /// Returns `None` if the key is missing or its entry has expired. An
    /// expired entry is removed before returning, unless a concurrent `set`
    /// already replaced it with a fresh one.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = Utc::now();

        // The read guard must be dropped before `remove_if` locks the shard again.
        let lookup = match self.entries.get(key) {
            Some(entry) if entry.is_expired(now) => Lookup::Expired,
            Some(entry) => Lookup::Fresh(entry.value.clone()),
            None => Lookup::Missing,
        };

        match lookup {
            Lookup::Fresh(value) => Some(value),
            Lookup::Expired => {
                self.entries.remove_if(key, |_, entry| entry.is_expired(now));
                None
            }
            Lookup::Missing => None,
        }
    }
}
