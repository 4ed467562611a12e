//! Main application modules.
//!
//! This module provides IP validation, input and output file handling, the
//! interactive shell, shutdown handling, and statistics printing used by the
//! main application.

pub mod input;
pub mod interactive;
pub mod ip;
pub mod output;
pub mod shutdown;
pub mod statistics;

// Re-export public API
pub use input::read_ip_file;
pub use interactive::run_interactive;
pub use ip::{filter_valid_ips, is_private_ip, validate_ip};
pub use output::save_to_file;
pub use shutdown::shutdown_gracefully;
pub use statistics::print_run_summary;
