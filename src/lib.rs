//! Calendar holiday service library
//!
//! Exposes the cache, the upstream client, the aggregator and the HTTP server
//! so the binary and the integration tests share one implementation.

pub mod aggregator;
pub mod cache;
pub mod cli;
pub mod data;
pub mod server;
