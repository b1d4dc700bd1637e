//! Loading and interrogating the static quote dataset.
//!
//! The dataset is a JSON array of `{ text, author, theme }` objects. It is
//! the sole source of truth for available quotes and themes, loaded once and
//! treated as read-only for the lifetime of the process.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::core::models::{ALL_THEMES, Quote};
use crate::errors::QuoteError;

/// Reads the quote dataset from a JSON file.
///
/// Records that are not well-formed quote objects, or that carry blank
/// fields, are dropped with a logged warning rather than failing the whole
/// load; an unreadable file or a top-level value that is not an array fails
/// with [`QuoteError::Dataset`].
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Vec<Quote>, QuoteError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .map_err(|e| QuoteError::Dataset(format!("{}: {e}", path.display())))?;

    parse_dataset(&raw)
}

/// Parses the dataset from raw JSON text. Split out from [`load_dataset`]
/// so callers holding the bytes already (tests, bundled data) skip the
/// filesystem.
pub fn parse_dataset(raw: &str) -> Result<Vec<Quote>, QuoteError> {
    let records: Vec<serde_json::Value> =
        serde_json::from_str(raw).map_err(|e| QuoteError::Dataset(e.to_string()))?;

    let total = records.len();
    let quotes: Vec<Quote> = records
        .into_iter()
        .filter_map(|record| serde_json::from_value::<Quote>(record).ok())
        .filter(|q| q.is_valid())
        .collect();

    if quotes.len() < total {
        warn!(
            dropped = total - quotes.len(),
            kept = quotes.len(),
            "Dropped dataset records with missing or blank fields"
        );
    }
    info!(count = quotes.len(), "Loaded quote dataset");

    Ok(quotes)
}

/// Collects the distinct theme values, sorted lexicographically, with the
/// `"All"` sentinel prepended.
#[must_use]
pub fn available_themes(quotes: &[Quote]) -> Vec<String> {
    let mut themes: Vec<String> = quotes.iter().map(|q| q.theme.clone()).collect();
    themes.sort();
    themes.dedup();

    let mut out = Vec::with_capacity(themes.len() + 1);
    out.push(ALL_THEMES.to_string());
    out.extend(themes);
    out
}
