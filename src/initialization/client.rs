//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{TransportConfig, TCP_CONNECT_TIMEOUT_SECS};
use crate::error_handling::InitializationError;

/// Initializes the provider HTTP client.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the transport config
/// - Request timeout plus a shorter TCP connect timeout
/// - Idle connection pool sized by `max_idle_connections`
/// - Optional proxy applied to all schemes
///
/// # Errors
///
/// Returns `InitializationError::InvalidUrlError` for an unparseable proxy URL,
/// or `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &TransportConfig) -> Result<reqwest::Client, InitializationError> {
    let mut builder = ClientBuilder::new()
        .timeout(config.timeout)
        .connect_timeout(Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS).min(config.timeout))
        .pool_max_idle_per_host(config.max_idle_connections)
        .pool_idle_timeout(Duration::from_secs(90))
        .user_agent(config.user_agent.clone());

    if let Some(proxy_url) = config.proxy_url.as_deref() {
        let parsed = url::Url::parse(proxy_url).map_err(|e| InitializationError::InvalidUrlError {
            url: proxy_url.to_string(),
            reason: e.to_string(),
        })?;
        log::debug!("Routing provider traffic through proxy {}", parsed);
        builder = builder.proxy(reqwest::Proxy::all(parsed.as_str())?);
    }

    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_default_config() {
        assert!(init_client(&TransportConfig::default()).is_ok());
    }

    #[test]
    fn test_init_client_with_proxy() {
        let config = TransportConfig {
            proxy_url: Some("http://127.0.0.1:3128".to_string()),
            ..Default::default()
        };
        assert!(init_client(&config).is_ok());
    }

    #[test]
    fn test_init_client_rejects_garbage_proxy() {
        let config = TransportConfig {
            proxy_url: Some("::::".to_string()),
            ..Default::default()
        };
        match init_client(&config) {
            Err(InitializationError::InvalidUrlError { url, .. }) => assert_eq!(url, "::::"),
            other => panic!("expected InvalidUrlError, got {:?}", other.map(|_| ())),
        }
    }
}
