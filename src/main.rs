//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ip_lookup` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Writing results to stdout
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use ip_lookup::config::{DEFAULT_API_BASE_URL, HTTP_TIMEOUT_SECS};
use ip_lookup::initialization::init_logger_with;
use ip_lookup::{
    run_interactive_mode, run_lookup, Config, LogFormat, LogLevel, OutputFormat, TransportConfig,
};

/// Look up geolocation and network details for IP addresses.
#[derive(Debug, Parser)]
#[command(name = "ip_lookup", version, about)]
struct Cli {
    /// IP addresses to look up
    ips: Vec<String>,

    /// Read IPs from a file, one per line (blank lines and # comments are skipped)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Also look up your own public IP address
    #[arg(long = "self")]
    lookup_self: bool,

    /// Output format: text, json, csv or yaml
    #[arg(long, default_value = "text")]
    format: String,

    /// Comma-separated fields to include (e.g. ip,country,isp)
    #[arg(long)]
    fields: Option<String>,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,

    /// Start an interactive lookup shell
    #[arg(short, long)]
    interactive: bool,

    /// Geolocation provider base URL
    #[arg(long, env = "IP_LOOKUP_API_URL", default_value = DEFAULT_API_BASE_URL)]
    api_url: String,

    /// HTTP(S) proxy for provider requests
    #[arg(long, env = "IP_LOOKUP_PROXY")]
    proxy: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = HTTP_TIMEOUT_SECS)]
    timeout_seconds: u64,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,
}

impl Cli {
    fn log_filter(&self) -> log::LevelFilter {
        if self.quiet {
            log::LevelFilter::Error
        } else {
            self.log_level.clone().into()
        }
    }

    fn into_config(self) -> Result<Config> {
        let format: OutputFormat = self.format.parse()?;
        Ok(Config {
            ips: self.ips,
            file: self.file,
            lookup_self: self.lookup_self,
            format,
            fields: self.fields,
            output: self.output,
            log_level: self.log_level,
            log_format: self.log_format,
            api_base_url: self.api_url,
            transport: TransportConfig {
                timeout: Duration::from_secs(self.timeout_seconds),
                proxy_url: self.proxy.filter(|p| !p.trim().is_empty()),
                ..Default::default()
            },
            ..Default::default()
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // Try loading from current directory first, then from the executable's directory
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let cli = Cli::parse();

    init_logger_with(cli.log_filter(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    let interactive = cli.interactive;
    let config = match cli.into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ip_lookup error: {:#}", e);
            process::exit(1);
        }
    };

    if interactive {
        if let Err(e) = run_interactive_mode(config).await {
            eprintln!("ip_lookup error: {:#}", e);
            process::exit(1);
        }
        return Ok(());
    }

    let to_stdout = config.output.is_none();
    match run_lookup(config).await {
        Ok(report) => {
            if to_stdout && !report.rendered.is_empty() {
                println!("{}", report.rendered.trim_end_matches('\n'));
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("ip_lookup error: {:#}", e);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_to_text_and_provider_url() {
        let cli = Cli::try_parse_from(["ip_lookup", "8.8.8.8"]).unwrap();
        assert_eq!(cli.log_filter(), log::LevelFilter::Info);
        let config = cli.into_config().unwrap();
        assert_eq!(config.ips, vec!["8.8.8.8"]);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.transport.timeout, Duration::from_secs(10));
        assert!(config.transport.proxy_url.is_none());
    }

    #[test]
    fn test_cli_quiet_lowers_log_level() {
        let cli =
            Cli::try_parse_from(["ip_lookup", "--quiet", "--log-level", "debug", "1.1.1.1"])
                .unwrap();
        assert_eq!(cli.log_filter(), log::LevelFilter::Error);
    }

    #[test]
    fn test_cli_unknown_format_is_config_error() {
        let cli = Cli::try_parse_from(["ip_lookup", "--format", "xml", "8.8.8.8"]).unwrap();
        let err = cli.into_config().unwrap_err();
        assert!(format!("{:#}", err).contains("unsupported format: xml"));
    }

    #[test]
    fn test_cli_full_flag_set() {
        let cli = Cli::try_parse_from([
            "ip_lookup",
            "--file",
            "ips.txt",
            "--self",
            "--format",
            "json",
            "--fields",
            "ip,country",
            "--output",
            "out/result.json",
            "--api-url",
            "http://localhost:9000",
            "--proxy",
            "http://proxy.local:3128",
            "--timeout-seconds",
            "3",
        ])
        .unwrap();
        let config = cli.into_config().unwrap();
        assert_eq!(config.file, Some(PathBuf::from("ips.txt")));
        assert!(config.lookup_self);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.fields.as_deref(), Some("ip,country"));
        assert_eq!(config.output, Some(PathBuf::from("out/result.json")));
        assert_eq!(config.api_base_url, "http://localhost:9000");
        assert_eq!(
            config.transport.proxy_url.as_deref(),
            Some("http://proxy.local:3128")
        );
        assert_eq!(config.transport.timeout, Duration::from_secs(3));
    }
}
