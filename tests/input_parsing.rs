//! Tests for reading IP lists from files.

use std::io::Write;
use std::time::Duration;

use ip_lookup::{run_lookup, Config, LookupSettings, TransportConfig};
use tempfile::NamedTempFile;
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Answers `/{ip}/json/` with a minimal record for that IP.
struct EchoResponder;

impl Respond for EchoResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let ip = request
            .url
            .path()
            .trim_start_matches('/')
            .trim_end_matches("/json/")
            .to_string();
        ResponseTemplate::new(200)
            .set_body_string(format!(r#"{{"ip": "{}", "org": "Example Net"}}"#, ip))
    }
}

async fn echo_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/[^/]+/json/$"))
        .respond_with(EchoResponder)
        .mount(&server)
        .await;
    server
}

fn config_for(server: &MockServer, file: &NamedTempFile) -> Config {
    Config {
        file: Some(file.path().to_path_buf()),
        api_base_url: server.uri(),
        transport: TransportConfig {
            retry_backoff: Duration::from_millis(10),
            ..Default::default()
        },
        lookup: LookupSettings {
            retry_backoff: Duration::from_millis(10),
            ..Default::default()
        },
        fields: Some("ip".to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_file_input_skips_comments_blanks_and_invalid() {
    let server = echo_server().await;
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "# public resolvers").unwrap();
    writeln!(file, "8.8.8.8").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "  1.1.1.1  ").unwrap();
    writeln!(file, "999.999.999.999").unwrap();
    writeln!(file, "2001:4860:4860::8888").unwrap();

    let report = run_lookup(config_for(&server, &file)).await.unwrap();
    assert_eq!(report.total, 3);
    assert_eq!(report.successful, 3);
    let ips: Vec<&str> = report
        .records
        .iter()
        .map(|slot| slot.as_ref().unwrap().ip.as_str())
        .collect();
    assert_eq!(ips, vec!["8.8.8.8", "1.1.1.1", "2001:4860:4860::8888"]);
}

#[tokio::test]
async fn test_file_takes_precedence_over_positional_ips() {
    let server = echo_server().await;
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "9.9.9.9").unwrap();

    let config = Config {
        ips: vec!["8.8.8.8".to_string()],
        ..config_for(&server, &file)
    };
    let report = run_lookup(config).await.unwrap();
    assert_eq!(report.total, 1);
    assert_eq!(report.rendered, "Ip: 9.9.9.9\n");
}

#[tokio::test]
async fn test_file_with_only_comments_is_an_error() {
    let server = echo_server().await;
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "# nothing here").unwrap();
    writeln!(file).unwrap();

    let err = run_lookup(config_for(&server, &file)).await.unwrap_err();
    assert!(format!("{:#}", err).contains("no valid IP addresses"));
}

#[tokio::test]
async fn test_missing_file_is_an_error() {
    let config = Config {
        file: Some("/definitely/not/here.txt".into()),
        ..Default::default()
    };
    let err = run_lookup(config).await.unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to open input file"));
}

#[tokio::test]
async fn test_batch_order_matches_file_order() {
    let server = echo_server().await;
    let mut file = NamedTempFile::new().unwrap();
    let ips: Vec<String> = (1..=20).map(|i| format!("198.51.100.{}", i)).collect();
    for ip in &ips {
        writeln!(file, "{}", ip).unwrap();
    }

    let report = run_lookup(config_for(&server, &file)).await.unwrap();
    assert_eq!(report.records.len(), ips.len());
    for (ip, slot) in ips.iter().zip(&report.records) {
        assert_eq!(&slot.as_ref().unwrap().ip, ip);
    }
}
