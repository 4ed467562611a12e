//! Configuration constants.
//!
//! This module defines the defaults used throughout the application: provider
//! endpoint, retry budgets, backoff timing, cache lifetime and HTTP limits.

use std::time::Duration;

/// Default geolocation provider base URL.
///
/// Requests are issued as `{base}/{ip}/json/`. Override with `--api-url` or the
/// `IP_LOOKUP_API_URL` environment variable.
pub const DEFAULT_API_BASE_URL: &str = "https://ipapi.co";

/// Default User-Agent header sent to the provider.
pub const DEFAULT_USER_AGENT: &str = concat!("ip_lookup/", env!("CARGO_PKG_VERSION"));

// Lookup orchestration
/// Maximum lookup attempts per IP, and the failed-attempt ceiling after which
/// an IP is throttled without any further network calls.
pub const MAX_RETRIES: u32 = 3;
/// Base delay between lookup attempts. Attempt `n` (1-based) waits `RETRY_BACKOFF_TIME * n`.
pub const RETRY_BACKOFF_TIME: Duration = Duration::from_secs(3);
/// Lifetime of a successful lookup in the cache (24 hours).
pub const CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);
/// How often the background sweeper reclaims expired cache entries.
pub const CACHE_SWEEP_INTERVAL: Duration = Duration::from_secs(10 * 60);

// Transport
/// Per-request timeout in seconds
pub const HTTP_TIMEOUT_SECS: u64 = 10;
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;
/// Total requests the transport issues for one call before giving up
pub const TRANSPORT_RETRY_LIMIT: u32 = 3;
/// Base delay between transport-level retries (linear, like the lookup backoff)
pub const TRANSPORT_RETRY_BACKOFF: Duration = Duration::from_secs(1);
/// Idle connections kept per host
pub const MAX_IDLE_CONNECTIONS: usize = 100;

// HTTP status codes (for clarity and consistency)
/// The only status the resolver parses as a record
pub const HTTP_STATUS_OK: u16 = 200;
/// Provider rate limit; carries a `Retry-After` header
pub const HTTP_STATUS_TOO_MANY_REQUESTS: u16 = 429;
