//! ip_lookup library: cached, concurrent IP geolocation lookups
//!
//! This library resolves IP addresses against a remote geolocation provider and
//! returns structured records with location, network owner, and hosting/proxy/mobile
//! flags. Lookups are cached for a day, failing targets are throttled after
//! repeated failures, and batches are fanned out concurrently while preserving
//! input order.
//!
//! # Example
//!
//! ```no_run
//! use ip_lookup::{Config, run_lookup};
//! use tokio;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     ips: vec!["8.8.8.8".to_string(), "1.1.1.1".to_string()],
//!     ..Default::default()
//! };
//!
//! let report = run_lookup(config).await?;
//! println!("Looked up {} IPs: {} succeeded, {} failed",
//!          report.total, report.successful, report.failed);
//! print!("{}", report.rendered);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

mod app;
mod cache;
pub mod config;
mod error_handling;
pub mod format;
mod geoip;
pub mod initialization;
mod lookup;
pub mod transport;

// Re-export public API
pub use app::{filter_valid_ips, is_private_ip, validate_ip};
pub use cache::{spawn_sweeper, CacheEntry, LookupCache};
pub use config::{Config, LogFormat, LogLevel, LookupSettings, TransportConfig};
pub use error_handling::{ErrorType, InitializationError, LookupError, ProcessingStats};
pub use format::{render, FormatError, OutputFormat};
pub use geoip::{build_request, detect_hosting, parse_response, LookupRecord, Resolver};
pub use lookup::Orchestrator;
pub use run::{run_interactive_mode, run_lookup, LookupReport};

// Internal run module (wires the pipeline for one invocation)
mod run {
    use anyhow::{bail, Context, Result};
    use std::sync::Arc;
    use std::time::Instant;

    use log::{debug, info};
    use tokio_util::sync::CancellationToken;

    use crate::app::{
        filter_valid_ips, print_run_summary, read_ip_file, run_interactive, save_to_file,
        shutdown_gracefully,
    };
    use crate::config::Config;
    use crate::format::{parse_fields, render};
    use crate::geoip::{LookupRecord, Resolver};
    use crate::initialization::init_cache;
    use crate::lookup::Orchestrator;
    use crate::transport::ReqwestTransport;

    /// Results of a lookup run.
    #[derive(Debug, Clone)]
    pub struct LookupReport {
        /// Number of IPs sent to the orchestrator
        pub total: usize,
        /// Lookups that produced a record
        pub successful: usize,
        /// Lookups that failed or were throttled
        pub failed: usize,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
        /// Per-IP results in input order; `None` marks a failed lookup
        pub records: Vec<Option<LookupRecord>>,
        /// Records rendered in the configured format
        pub rendered: String,
    }

    /// Builds the transport, resolver, cache and orchestrator for `config`.
    ///
    /// Returns the orchestrator and the token that stops the cache sweeper.
    fn build_orchestrator(config: &Config) -> Result<(Arc<Orchestrator>, CancellationToken)> {
        let transport_config = config.transport.clone().normalized();
        let resolver_user_agent = transport_config.user_agent.clone();
        let transport = ReqwestTransport::new(transport_config)
            .context("Failed to initialize HTTP transport")?;
        let resolver = Resolver::new(
            Arc::new(transport),
            config.api_base_url.as_str(),
            resolver_user_agent,
        );
        let (cache, sweeper_shutdown) = init_cache(config.sweep_interval);
        let orchestrator = Orchestrator::new(cache, resolver, config.lookup.clone());
        debug!("Using provider {}", config.api_base_url);
        Ok((Arc::new(orchestrator), sweeper_shutdown))
    }

    /// Collects the IPs to look up: the file when one is given, otherwise the
    /// command-line list. A self lookup adds the empty IP at the end.
    async fn collect_ips(config: &Config) -> Result<Vec<String>> {
        let raw = match &config.file {
            Some(path) => {
                let ips = read_ip_file(path).await?;
                info!("Read {} entries from {}", ips.len(), path.display());
                ips
            }
            None => config.ips.clone(),
        };

        let mut ips = filter_valid_ips(&raw);
        if config.lookup_self {
            ips.push(String::new());
        }
        Ok(ips)
    }

    /// Runs a batch lookup with the provided configuration.
    ///
    /// Reads and validates the IPs, looks them all up concurrently, renders the
    /// results, and writes them to `config.output` when set. The rendered text
    /// is also returned in the report.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The input file cannot be read
    /// - No valid IP remains after filtering
    /// - The field list names an unknown field
    /// - The HTTP transport cannot be initialized (e.g. a malformed proxy URL)
    /// - The output file cannot be written
    ///
    /// Individual lookup failures are not errors; they show up as `None` slots
    /// and in the `failed` count.
    pub async fn run_lookup(config: Config) -> Result<LookupReport> {
        let ips = collect_ips(&config).await?;
        if ips.is_empty() {
            bail!("no valid IP addresses to look up; pass IPs as arguments or use --file");
        }
        // Reject a bad field list before any network traffic
        parse_fields(config.fields.as_deref())?;

        let (orchestrator, sweeper_shutdown) = build_orchestrator(&config)?;

        let start = Instant::now();
        let records = orchestrator.lookup_batch(&ips).await;
        let elapsed_seconds = start.elapsed().as_secs_f64();

        shutdown_gracefully(Some(sweeper_shutdown));

        let total = records.len();
        let successful = records.iter().filter(|slot| slot.is_some()).count();
        let failed = total - successful;
        print_run_summary(
            total,
            successful,
            failed,
            elapsed_seconds,
            orchestrator.stats(),
        );

        let rendered = render(&records, config.format, config.fields.as_deref())?;
        if let Some(path) = &config.output {
            save_to_file(path, &rendered).await?;
            info!("Output saved to {}", path.display());
        }

        Ok(LookupReport {
            total,
            successful,
            failed,
            elapsed_seconds,
            records,
            rendered,
        })
    }

    /// Runs the interactive shell on stdin/stdout until `exit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if the field list is invalid, the transport cannot be
    /// initialized, or stdin/stdout fail.
    pub async fn run_interactive_mode(config: Config) -> Result<()> {
        parse_fields(config.fields.as_deref())?;
        let (orchestrator, sweeper_shutdown) = build_orchestrator(&config)?;

        let result = run_interactive(orchestrator, config.format, config.fields.as_deref()).await;
        shutdown_gracefully(Some(sweeper_shutdown));

        let history = result?;
        debug!("Interactive session ended after {} distinct lookups", history.len());
        Ok(())
    }
}
