//! Tests for CLI argument parsing.

use clap::Parser;
use ip_lookup::config::{LogFormat, LogLevel, DEFAULT_API_BASE_URL};
use ip_lookup::{FormatError, OutputFormat};
use std::path::PathBuf;

// Import the CLI types from main.rs
// Note: We can't directly import from main.rs, so we'll test the parsing logic
// by creating a minimal test structure that mirrors the CLI

#[derive(Debug, clap::Parser)]
#[command(name = "ip_lookup")]
struct TestCli {
    ips: Vec<String>,
    #[arg(short, long)]
    file: Option<PathBuf>,
    #[arg(long = "self")]
    lookup_self: bool,
    #[arg(long, default_value = "text")]
    format: String,
    #[arg(long)]
    fields: Option<String>,
    #[arg(short, long)]
    output: Option<PathBuf>,
    #[arg(short, long)]
    quiet: bool,
    #[arg(short, long)]
    interactive: bool,
    #[arg(long, default_value = DEFAULT_API_BASE_URL)]
    api_url: String,
    #[arg(long)]
    proxy: Option<String>,
    #[arg(long, default_value_t = 10)]
    timeout_seconds: u64,
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,
}

#[test]
fn test_positional_ips() {
    let cli = TestCli::try_parse_from(["ip_lookup", "8.8.8.8", "1.1.1.1"]).unwrap();
    assert_eq!(cli.ips, vec!["8.8.8.8", "1.1.1.1"]);
    assert_eq!(cli.format, "text");
    assert_eq!(cli.api_url, DEFAULT_API_BASE_URL);
    assert!(!cli.interactive);
    assert!(!cli.quiet);
    assert!(matches!(cli.log_level, LogLevel::Info));
    assert!(matches!(cli.log_format, LogFormat::Plain));
}

#[test]
fn test_short_flags() {
    let cli = TestCli::try_parse_from(["ip_lookup", "-f", "ips.txt", "-o", "out.txt", "-q", "-i"])
        .unwrap();
    assert_eq!(cli.file, Some(PathBuf::from("ips.txt")));
    assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
    assert!(cli.quiet);
    assert!(cli.interactive);
    assert!(cli.ips.is_empty());
}

#[test]
fn test_self_flag() {
    let cli = TestCli::try_parse_from(["ip_lookup", "--self"]).unwrap();
    assert!(cli.lookup_self);
}

#[test]
fn test_log_options() {
    let cli = TestCli::try_parse_from([
        "ip_lookup",
        "--log-level",
        "trace",
        "--log-format",
        "json",
        "8.8.8.8",
    ])
    .unwrap();
    assert!(matches!(cli.log_level, LogLevel::Trace));
    assert!(matches!(cli.log_format, LogFormat::Json));
}

#[test]
fn test_invalid_log_level_is_rejected() {
    assert!(TestCli::try_parse_from(["ip_lookup", "--log-level", "loud"]).is_err());
}

#[test]
fn test_invalid_timeout_is_rejected() {
    assert!(TestCli::try_parse_from(["ip_lookup", "--timeout-seconds", "soon"]).is_err());
}

#[test]
fn test_format_names_parse() {
    for (name, expected) in [
        ("text", OutputFormat::Text),
        ("json", OutputFormat::Json),
        ("csv", OutputFormat::Csv),
        ("yaml", OutputFormat::Yaml),
        ("JSON", OutputFormat::Json),
    ] {
        let cli = TestCli::try_parse_from(["ip_lookup", "--format", name]).unwrap();
        assert_eq!(cli.format.parse::<OutputFormat>().unwrap(), expected);
    }

    let cli = TestCli::try_parse_from(["ip_lookup", "--format", "xml"]).unwrap();
    let err = cli.format.parse::<OutputFormat>().unwrap_err();
    assert!(matches!(err, FormatError::UnknownFormat(_)));
    assert_eq!(err.to_string(), "unsupported format: xml");
}
