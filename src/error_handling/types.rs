//! Error type definitions.
//!
//! This module defines the lookup error taxonomy, the initialization errors,
//! and the `ErrorType` categories used for run statistics.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The configured proxy or provider URL could not be parsed.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrlError {
        /// The rejected URL as given
        url: String,
        /// Parser message
        reason: String,
    },
}

/// Failure of a single IP lookup.
///
/// Transport and parse failures are retried by the orchestrator; `Throttled`
/// is returned before any network call is made.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LookupError {
    /// Malformed IP address (normally filtered before reaching the orchestrator).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The failed-attempt ceiling for this IP has been reached.
    #[error("too many failed attempts for {ip} ({attempts})")]
    Throttled {
        /// The throttled IP (empty for a self lookup)
        ip: String,
        /// Failed attempts recorded so far
        attempts: u32,
    },

    /// The provider answered 429.
    #[error("rate limit exceeded. retry after: {}", .retry_after.as_deref().unwrap_or("unknown"))]
    RateLimited {
        /// Raw `Retry-After` header value, when the provider sent one
        retry_after: Option<String>,
    },

    /// Network failure, timeout, or a status that is not retried.
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body could not be turned into a record.
    #[error("failed to parse IP info: {0}")]
    Parse(String),
}

/// Categories of lookup failures, counted per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    /// See [`LookupError::InvalidInput`]
    InvalidInput,
    /// See [`LookupError::Throttled`]
    Throttled,
    /// See [`LookupError::RateLimited`]
    RateLimited,
    /// See [`LookupError::Transport`]
    TransportError,
    /// See [`LookupError::Parse`]
    ParseError,
    /// A batch task panicked or was cancelled
    TaskFailure,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Human-readable label used in the run summary.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::InvalidInput => "Invalid input",
            ErrorType::Throttled => "Too many failed attempts",
            ErrorType::RateLimited => "Rate limited (429)",
            ErrorType::TransportError => "Transport error",
            ErrorType::ParseError => "Response parse error",
            ErrorType::TaskFailure => "Lookup task failure",
        }
    }
}
