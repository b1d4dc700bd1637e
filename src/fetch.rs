//! Client-side fetch of a new quote from the read endpoint.
//!
//! One request per user action, no retry; a failed fetch surfaces its
//! message and leaves the previously displayed quote in place. Overlapping
//! requests are ordered by a monotonically increasing token so that only
//! the latest issued request may update the displayed state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::info;

use crate::core::models::{ALL_THEMES, Quote};
use crate::errors::QuoteError;

const FETCH_TIMEOUT_SECS: u64 = 10;

/// Seam for fetching one quote for an optional theme.
#[async_trait]
pub trait QuoteFetcher {
    async fn fetch_quote(&self, theme: Option<&str>) -> Result<Quote, QuoteError>;
}

/// Fetcher talking to the HTTP read endpoint.
pub struct HttpQuoteFetcher {
    client: Client,
    base_url: String,
}

impl HttpQuoteFetcher {
    /// # Errors
    ///
    /// Fails with [`QuoteError::Transport`] when the HTTP client cannot be
    /// constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self, QuoteError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn endpoint(&self, theme: Option<&str>) -> String {
        let base = format!("{}/api/quotes/random", self.base_url.trim_end_matches('/'));
        match theme {
            Some(t) if t != ALL_THEMES => format!("{base}?theme={}", urlencoding::encode(t)),
            _ => base,
        }
    }
}

#[async_trait]
impl QuoteFetcher for HttpQuoteFetcher {
    async fn fetch_quote(&self, theme: Option<&str>) -> Result<Quote, QuoteError> {
        let endpoint = self.endpoint(theme);
        info!(%endpoint, "Fetching new quote");

        let response = self.client.get(&endpoint).send().await?;
        let status = response.status();

        if !status.is_success() {
            // Prefer the endpoint's own message from the error payload.
            let message = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|body| {
                    body.get("message")
                        .and_then(|m| m.as_str())
                        .map(ToString::to_string)
                })
                .unwrap_or_else(|| format!("HTTP status {status}"));
            return Err(QuoteError::Transport(message));
        }

        let quote: Quote = response.json().await?;
        Ok(quote)
    }
}

/// Orders overlapping fetches: each request takes a token, and only the
/// response carrying the latest issued token may win the displayed state.
#[derive(Debug, Default)]
pub struct FetchCoordinator {
    latest: AtomicU64,
}

impl FetchCoordinator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the token for a new request, invalidating all earlier ones.
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Returns whether a response carrying `token` is still the latest and
    /// may be applied; stale responses must be discarded.
    #[must_use]
    pub fn is_current(&self, token: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == token
    }
}
