/// Spark - a themed motivational quote service.
///
/// This crate implements the backend and client-side logic for a quote
/// front-end:
/// 1. A read API that returns one uniformly-random quote, optionally
///    narrowed to a theme
/// 2. A favorites list persisted through a pluggable key-value storage
///    backend, deduplicated by quote text
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for the serverless read endpoint
/// - A static JSON file as the sole source of quotes and themes
/// - An injected `StorageBackend` for the favorites slot, so the component
///   is testable with an in-memory fake
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use spark::core::dataset;
/// use spark::core::selector;
/// use spark::favorites::storage::MemoryBackend;
/// use spark::favorites::store::FavoritesStore;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Set up structured logging
///     spark::setup_logging();
///
///     let quotes = dataset::load_dataset("data/quotes.json")?;
///
///     // In-process equivalent of GET /api/quotes/random?theme=Humor
///     let quote = selector::random_quote(&quotes, Some("Humor"))?;
///     println!("\"{}\" — {}", quote.text, quote.author);
///
///     // Save it to the favorites slot
///     let mut store = FavoritesStore::new(MemoryBackend::new());
///     let favorites = store.load();
///     let favorites = store.add(favorites, quote)?;
///     println!("{} favorite(s)", favorites.len());
///     Ok(())
/// }
/// ```
// Module declarations
pub mod api;
pub mod core;
pub mod errors;
pub mod favorites;
pub mod fetch;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called at the start of each Lambda
/// handler.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// spark::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
