use async_trait::async_trait;
use spark::core::models::Quote;
use spark::errors::QuoteError;
use spark::fetch::{FetchCoordinator, QuoteFetcher};

/// Fake fetcher that always yields the same quote.
struct StaticFetcher {
    quote: Quote,
}

#[async_trait]
impl QuoteFetcher for StaticFetcher {
    async fn fetch_quote(&self, _theme: Option<&str>) -> Result<Quote, QuoteError> {
        Ok(self.quote.clone())
    }
}

/// Fake fetcher that always fails.
struct DownFetcher;

#[async_trait]
impl QuoteFetcher for DownFetcher {
    async fn fetch_quote(&self, _theme: Option<&str>) -> Result<Quote, QuoteError> {
        Err(QuoteError::Transport("connection refused".to_string()))
    }
}

#[test]
fn test_tokens_are_monotonically_increasing() {
    let coordinator = FetchCoordinator::new();
    let first = coordinator.begin();
    let second = coordinator.begin();
    assert!(second > first);
}

#[test]
fn test_latest_token_wins() {
    let coordinator = FetchCoordinator::new();
    let stale = coordinator.begin();
    let latest = coordinator.begin();

    // The response for the older request must be discarded regardless of
    // which one resolves first.
    assert!(!coordinator.is_current(stale));
    assert!(coordinator.is_current(latest));
}

#[tokio::test]
async fn test_racing_fetches_apply_only_latest() {
    let coordinator = FetchCoordinator::new();
    let fetcher = StaticFetcher {
        quote: Quote::new("winner", "X", "Wisdom"),
    };

    let stale_token = coordinator.begin();
    let latest_token = coordinator.begin();

    let mut displayed: Option<Quote> = None;

    // Latest response lands first.
    let latest_response = fetcher.fetch_quote(None).await.unwrap();
    if coordinator.is_current(latest_token) {
        displayed = Some(latest_response);
    }

    // The stale response resolves afterwards and must not clobber it.
    let stale_response = fetcher.fetch_quote(Some("Humor")).await.unwrap();
    if coordinator.is_current(stale_token) {
        displayed = Some(stale_response);
    }

    assert_eq!(displayed.unwrap().text, "winner");
}

#[tokio::test]
async fn test_failed_fetch_leaves_prior_state_intact() {
    let coordinator = FetchCoordinator::new();
    let fetcher = DownFetcher;

    let displayed = Quote::new("previous", "X", "Wisdom");
    let token = coordinator.begin();

    let result = fetcher.fetch_quote(None).await;
    assert!(matches!(result, Err(QuoteError::Transport(_))));
    assert!(coordinator.is_current(token));
    // The caller keeps showing the prior quote and may retry.
    assert_eq!(displayed.text, "previous");
}
