//! Provider request construction and response interpretation.

use std::sync::Arc;

use crate::config::{HTTP_STATUS_OK, HTTP_STATUS_TOO_MANY_REQUESTS};
use crate::error_handling::LookupError;
use crate::transport::{HttpTransport, TransportRequest, TransportResponse};

use super::types::{LookupRecord, ProviderResponse};

/// Builds the provider request for `ip`.
///
/// The IP is embedded in the path: `{base}/{ip}/json/`. An empty `ip` asks the
/// provider about the caller's own public address (`{base}/json/`).
pub fn build_request(base_url: &str, ip: &str, user_agent: &str) -> TransportRequest {
    let mut url = format!("{}/", base_url.trim_end_matches('/'));
    if !ip.is_empty() {
        url.push_str(ip);
        url.push('/');
    }
    url.push_str("json/");

    TransportRequest::get(url).with_header("User-Agent", user_agent)
}

/// Turns a provider response into a record or a classified error.
pub fn parse_response(response: &TransportResponse) -> Result<LookupRecord, LookupError> {
    if response.status == HTTP_STATUS_TOO_MANY_REQUESTS {
        return Err(LookupError::RateLimited {
            retry_after: response.header("retry-after").map(str::to_string),
        });
    }

    if response.status != HTTP_STATUS_OK {
        return Err(LookupError::Transport(format!(
            "unexpected status code: {}",
            response.status
        )));
    }

    let raw: ProviderResponse =
        serde_json::from_str(&response.body).map_err(|e| LookupError::Parse(e.to_string()))?;

    if raw.error.unwrap_or(false) {
        return Err(LookupError::Parse(
            raw.reason
                .unwrap_or_else(|| "provider reported an error".to_string()),
        ));
    }

    Ok(raw.into())
}

/// Resolves IPs against one provider through an [`HttpTransport`].
pub struct Resolver {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    user_agent: String,
}

impl Resolver {
    /// Creates a resolver that sends `user_agent` to `base_url` through `transport`.
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        base_url: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            user_agent: user_agent.into(),
        }
    }

    /// Provider base URL without a trailing path.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One resolution attempt: a single transport call (which may retry
    /// internally) followed by response interpretation.
    pub async fn resolve(&self, ip: &str) -> Result<LookupRecord, LookupError> {
        let request = build_request(&self.base_url, ip, &self.user_agent);
        log::debug!("Requesting {}", request.url);
        let response = self.transport.execute(&request).await?;
        parse_response(&response)
    }
}
