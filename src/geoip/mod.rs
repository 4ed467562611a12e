//! GeoIP lookup against a remote provider API.
//!
//! This module builds provider requests, interprets responses, and defines the
//! `LookupRecord` produced for each resolved IP.

mod hosting;
mod resolver;
mod types;

// Re-export public API
pub use hosting::detect_hosting;
pub use resolver::{build_request, parse_response, Resolver};
pub use types::LookupRecord;
