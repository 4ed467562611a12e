//! Configuration types and CLI option enums.
//!
//! This module defines the enums used for command-line parsing and the plain
//! configuration structs consumed by the library.

use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;

use crate::config::constants::{
    CACHE_SWEEP_INTERVAL, CACHE_TTL, DEFAULT_API_BASE_URL, DEFAULT_USER_AGENT,
    HTTP_TIMEOUT_SECS, MAX_IDLE_CONNECTIONS, MAX_RETRIES, RETRY_BACKOFF_TIME,
    TRANSPORT_RETRY_BACKOFF, TRANSPORT_RETRY_LIMIT,
};
use crate::format::OutputFormat;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// HTTP client settings for the provider transport.
///
/// Zero values are replaced by the defaults in [`TransportConfig::normalized`],
/// so callers can fill in only what they care about.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Per-request timeout
    pub timeout: Duration,
    /// Total requests issued per `execute` call (first try included)
    pub retry_limit: u32,
    /// Optional proxy for all provider traffic
    pub proxy_url: Option<String>,
    /// User-Agent header value
    pub user_agent: String,
    /// Idle connections kept per host
    pub max_idle_connections: usize,
    /// Base delay between transport retries (attempt `n` waits `n * retry_backoff`)
    pub retry_backoff: Duration,
}

impl TransportConfig {
    /// Returns a copy with zero-valued fields replaced by defaults.
    pub fn normalized(mut self) -> Self {
        if self.timeout.is_zero() {
            self.timeout = Duration::from_secs(HTTP_TIMEOUT_SECS);
        }
        if self.retry_limit == 0 {
            self.retry_limit = TRANSPORT_RETRY_LIMIT;
        }
        if self.max_idle_connections == 0 {
            self.max_idle_connections = MAX_IDLE_CONNECTIONS;
        }
        if self.user_agent.is_empty() {
            self.user_agent = DEFAULT_USER_AGENT.to_string();
        }
        self
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(HTTP_TIMEOUT_SECS),
            retry_limit: TRANSPORT_RETRY_LIMIT,
            proxy_url: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_idle_connections: MAX_IDLE_CONNECTIONS,
            retry_backoff: TRANSPORT_RETRY_BACKOFF,
        }
    }
}

/// Orchestrator knobs: retry budget, backoff and cache lifetime.
#[derive(Debug, Clone)]
pub struct LookupSettings {
    /// Attempts per lookup, and the failed-attempt ceiling for throttling
    pub max_retries: u32,
    /// Base backoff between lookup attempts
    pub retry_backoff: Duration,
    /// TTL applied to successful results
    pub cache_ttl: Duration,
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            max_retries: MAX_RETRIES,
            retry_backoff: RETRY_BACKOFF_TIME,
            cache_ttl: CACHE_TTL,
        }
    }
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use ip_lookup::Config;
///
/// let config = Config {
///     ips: vec!["8.8.8.8".to_string(), "1.1.1.1".to_string()],
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// IPs given on the command line
    pub ips: Vec<String>,

    /// Newline-delimited file of IPs (takes precedence over `ips`)
    pub file: Option<PathBuf>,

    /// Look up the caller's own public address
    pub lookup_self: bool,

    /// Output format
    pub format: OutputFormat,

    /// Comma-separated field allow-list
    pub fields: Option<String>,

    /// Write rendered output here instead of stdout
    pub output: Option<PathBuf>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Provider base URL
    pub api_base_url: String,

    /// Provider transport settings
    pub transport: TransportConfig,

    /// Orchestrator settings
    pub lookup: LookupSettings,

    /// Background cache sweep period
    pub sweep_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ips: Vec::new(),
            file: None,
            lookup_self: false,
            format: OutputFormat::Text,
            fields: None,
            output: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            transport: TransportConfig::default(),
            lookup: LookupSettings::default(),
            sweep_interval: CACHE_SWEEP_INTERVAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.ips.is_empty());
        assert!(config.file.is_none());
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.api_base_url, "https://ipapi.co");
        assert_eq!(config.lookup.max_retries, 3);
        assert_eq!(config.lookup.retry_backoff, Duration::from_secs(3));
        assert_eq!(config.lookup.cache_ttl, Duration::from_secs(86_400));
    }

    #[test]
    fn test_transport_config_normalized_fills_zero_values() {
        let cfg = TransportConfig {
            timeout: Duration::ZERO,
            retry_limit: 0,
            proxy_url: None,
            user_agent: String::new(),
            max_idle_connections: 0,
            retry_backoff: Duration::from_millis(5),
        }
        .normalized();

        assert_eq!(cfg.timeout, Duration::from_secs(10));
        assert_eq!(cfg.retry_limit, 3);
        assert_eq!(cfg.max_idle_connections, 100);
        assert!(cfg.user_agent.starts_with("ip_lookup/"));
        // Backoff is a caller choice; zero means "retry immediately"
        assert_eq!(cfg.retry_backoff, Duration::from_millis(5));
    }

    #[test]
    fn test_transport_config_normalized_keeps_explicit_values() {
        let cfg = TransportConfig {
            timeout: Duration::from_secs(2),
            retry_limit: 5,
            proxy_url: Some("http://127.0.0.1:3128".to_string()),
            user_agent: "custom/1.0".to_string(),
            max_idle_connections: 4,
            retry_backoff: Duration::ZERO,
        }
        .normalized();

        assert_eq!(cfg.timeout, Duration::from_secs(2));
        assert_eq!(cfg.retry_limit, 5);
        assert_eq!(cfg.user_agent, "custom/1.0");
        assert_eq!(cfg.max_idle_connections, 4);
    }
}
