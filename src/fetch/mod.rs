//! The single-URL HTTP GET primitive.
//!
//! This module defines the `Fetcher` trait (the one external collaborator
//! the gather strategies depend on) and its production implementation
//! backed by reqwest.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info};

/// Error returned by a failed fetch.
///
/// Transport failures are fail-fast: the first error aborts the whole
/// aggregation and propagates to the caller. No retries, no partial results.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be sent or the server returned a connection-level fault.
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response arrived but its body could not be read as text.
    #[error("reading body from {url} failed: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// A single asynchronous GET exchange producing the response body as text.
///
/// Implementations must be safe to invoke any number of times concurrently
/// and must resolve exactly once per call. The gather strategies in
/// [`crate::gather`] are generic over this trait so tests can substitute a
/// simulated fetcher with controlled latencies.
#[async_trait]
pub trait Fetcher: Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Production fetcher over a shared reqwest client.
///
/// The client is deliberately built with default settings: no timeout and
/// no retry policy. Once issued, a request is assumed to eventually complete.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with a fresh client.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        // Logged at issuance time, before any bytes move. In parallel mode
        // these lines appear near-simultaneously; in serial mode they are
        // spaced by each prior request's latency.
        info!("GET {:?}...", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let body = response.text().await.map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })?;

        debug!("{:?} page is {} bytes", url, body.len());
        Ok(body)
    }
}
