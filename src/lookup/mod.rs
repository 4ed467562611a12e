//! Lookup orchestration.
//!
//! The [`Orchestrator`] owns the cache and the resolver. It runs the per-IP
//! algorithm (cache, throttle, retry with linear backoff, cache write) and fans
//! a batch of IPs out over Tokio tasks.

mod batch;
mod orchestrator;

pub use orchestrator::Orchestrator;
