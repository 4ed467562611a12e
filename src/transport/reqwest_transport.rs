//! reqwest-backed transport with request-level retries.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio_retry::RetryIf;

use super::{HttpTransport, TransportError, TransportRequest, TransportResponse};
use crate::config::{TransportConfig, HTTP_STATUS_TOO_MANY_REQUESTS};
use crate::error_handling::{linear_backoff, InitializationError};
use crate::initialization::init_client;

/// Returns true for statuses the transport retries on its own: 5xx and 429.
pub fn is_retriable_status(status: u16) -> bool {
    status == HTTP_STATUS_TOO_MANY_REQUESTS || (500..600).contains(&status)
}

/// Outcome of one attempt that should be considered for a retry.
enum AttemptFailure {
    /// A response arrived but its status is transient.
    Status(TransportResponse),
    /// No response at all.
    Network(TransportError),
}

impl AttemptFailure {
    fn is_retriable(&self) -> bool {
        match self {
            AttemptFailure::Status(_) => true,
            AttemptFailure::Network(e) => e.is_retriable(),
        }
    }
}

/// Production transport built on a shared `reqwest::Client`.
///
/// One `execute` call issues at most `retry_limit` requests. 5xx, 429 and
/// network failures are retried after `retry_backoff * n`; when the budget runs
/// out the last response (or network error) is handed back unchanged so the
/// resolver can classify it.
pub struct ReqwestTransport {
    client: reqwest::Client,
    retry_limit: u32,
    retry_backoff: Duration,
}

impl ReqwestTransport {
    /// Builds the transport and its underlying client.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError` if the proxy URL is invalid or the client
    /// cannot be constructed.
    pub fn new(config: TransportConfig) -> Result<Self, InitializationError> {
        let config = config.normalized();
        let client = init_client(&config)?;
        Ok(Self {
            client,
            retry_limit: config.retry_limit,
            retry_backoff: config.retry_backoff,
        })
    }

    async fn send_once(
        client: &reqwest::Client,
        request: &TransportRequest,
    ) -> Result<TransportResponse, TransportError> {
        let mut builder = client.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_ascii_lowercase(), v.to_string()))
            })
            .collect();
        let body = response.text().await?;

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: &TransportRequest) -> Result<TransportResponse, TransportError> {
        let strategy = linear_backoff(self.retry_backoff, self.retry_limit);
        let client = &self.client;
        let attempts = AtomicU32::new(0);
        let attempts = &attempts;

        let result = RetryIf::start(
            strategy,
            move || async move {
                let n = attempts.fetch_add(1, Ordering::SeqCst) + 1;
                match Self::send_once(client, request).await {
                    Ok(resp) if is_retriable_status(resp.status) => {
                        log::debug!(
                            "Transport attempt {} for {} returned {}",
                            n,
                            request.url,
                            resp.status
                        );
                        Err(AttemptFailure::Status(resp))
                    }
                    Ok(resp) => Ok(resp),
                    Err(e) => {
                        log::debug!("Transport attempt {} for {} failed: {}", n, request.url, e);
                        Err(AttemptFailure::Network(e))
                    }
                }
            },
            |failure: &AttemptFailure| failure.is_retriable(),
        )
        .await;

        match result {
            Ok(resp) => Ok(resp),
            Err(AttemptFailure::Status(resp)) => Ok(resp),
            Err(AttemptFailure::Network(e)) => Err(e),
        }
    }
}
