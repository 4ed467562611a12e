//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, retry budgets, cache lifetime)
//! - Library configuration structs and CLI option enums

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, LookupSettings, TransportConfig};
