//! Cache module for upstream holiday data
//!
//! This module provides an in-memory, thread-safe cache with per-entry
//! time-to-live. Entries expire lazily: an expired entry is dropped the next
//! time its key is read.

mod ttl;

pub use ttl::TtlCache;
