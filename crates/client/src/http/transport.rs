//! Raw HTTP exchange: one attempt, caller-supplied timeout, JSON in and out.
//!
//! This is the sole error-translation point for transport-level failures: a
//! non-success status becomes [`SentriaError::Http`] carrying the status
//! code and the raw body verbatim, a connection/timeout failure becomes
//! [`SentriaError::Network`], and an undecodable success body becomes
//! [`SentriaError::Decode`].

use std::time::Duration;

use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{Client as ReqwestClient, Method};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use sentria_domain::{Result, SentriaError};

/// Thin wrapper around a shared `reqwest` client configured for TLS 1.2+.
///
/// Retries and backoff are deliberately absent: a call is a single attempt
/// and the caller owns any retry policy.
#[derive(Clone)]
pub struct Transport {
    client: ReqwestClient,
}

impl Transport {
    pub fn new() -> Result<Self> {
        let client = ReqwestClient::builder()
            .min_tls_version(reqwest::tls::Version::TLS_1_2)
            .build()
            .map_err(|err| SentriaError::Network(format!("failed to build HTTP client: {err}")))?;

        Ok(Self { client })
    }

    /// Execute one request and decode the JSON response into `T`.
    ///
    /// `body`, when present, is an already-serialized JSON document; GET
    /// callers pass `None`. `timeout` bounds the whole exchange.
    pub async fn exchange<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        body: Option<String>,
        headers: HeaderMap,
        timeout: Duration,
    ) -> Result<T> {
        let mut request =
            self.client.request(method.clone(), url).headers(headers).timeout(timeout);

        if let Some(json) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(json);
        }

        debug!(%method, url, "sending HTTP request");

        let response = request
            .send()
            .await
            .map_err(|err| SentriaError::Network(format!("HTTP request failed: {err}")))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|err| SentriaError::Network(format!("failed to read response body: {err}")))?;

        debug!(%method, url, status = status.as_u16(), "received HTTP response");

        if !status.is_success() {
            warn!(%method, url, status = status.as_u16(), "remote service returned an error status");
            return Err(SentriaError::Http { status: status.as_u16(), body: text });
        }

        serde_json::from_str(&text)
            .map_err(|err| SentriaError::Decode(format!("failed to decode response body: {err}")))
    }
}
