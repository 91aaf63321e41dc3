//! HTTP transport for the Foursquare v2 API.

use std::future::Future;
use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::{types::Envelope, Error};

/// Request timeout applied by [`HttpTransport::new`].
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("foursquare_api/", env!("CARGO_PKG_VERSION"));

/// Performs a single request and returns the decoded JSON body.
///
/// Implementations send `params` as the query string for GET and as a form
/// body for POST, and turn any non-success response into an error.
pub trait Transport {
    fn get(
        &self,
        url: Url,
        params: &[(String, String)],
    ) -> impl Future<Output = Result<Value, Error>> + Send;

    fn post(
        &self,
        url: Url,
        params: &[(String, String)],
    ) -> impl Future<Output = Result<Value, Error>> + Send;
}

/// [`Transport`] backed by a shared `reqwest::Client`.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport with the default 30-second timeout.
    pub fn new() -> Result<Self, Error> {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        Ok(Self { client })
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Value, Error> {
        let resp = request
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            return Err(error_for_status(status.as_u16(), &body));
        }

        serde_json::from_str::<Value>(&body).map_err(|e| {
            tracing::error!(
                "Failed to parse response: {} | body: {}",
                e,
                truncate_body(&body)
            );
            Error::RequestFailed
        })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: Url, params: &[(String, String)]) -> Result<Value, Error> {
        tracing::debug!("GET {}", url.path());
        self.send(self.client.get(url).query(params)).await
    }

    async fn post(&self, url: Url, params: &[(String, String)]) -> Result<Value, Error> {
        tracing::debug!("POST {}", url.path());
        self.send(self.client.post(url).form(params)).await
    }
}

fn error_for_status(status: u16, body: &str) -> Error {
    match serde_json::from_str::<Envelope>(body) {
        Ok(envelope) if envelope.meta.error_type.is_some() => {
            let error_type = envelope.meta.error_type.unwrap_or_default();
            let detail = envelope.meta.error_detail.unwrap_or_default();
            tracing::error!(
                "Request failed with status {}: {} {}",
                status,
                error_type,
                detail
            );
            Error::Api {
                status,
                error_type,
                detail,
            }
        }
        _ => {
            let snippet = truncate_body(body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            Error::HttpStatus {
                status,
                body: snippet,
            }
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
