//! The favorites list: one persisted slot holding an ordered, text-deduped
//! sequence of quotes.

use tracing::{info, warn};

use crate::core::models::Quote;
use crate::errors::QuoteError;
use crate::favorites::storage::StorageBackend;

/// Storage key for the single favorites slot.
pub const FAVORITES_KEY: &str = "favoriteQuotes";

/// Favorites operations over an injected storage backend.
///
/// All mutating operations persist before reporting success; when the write
/// fails the caller's in-memory list is left untouched, keeping memory and
/// durable state consistent.
#[derive(Debug)]
pub struct FavoritesStore<S: StorageBackend> {
    backend: S,
}

impl<S: StorageBackend> FavoritesStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Reads the favorites list from storage.
    ///
    /// An absent slot yields an empty list. A slot that cannot be parsed as
    /// a JSON array of quotes is recovered as empty with a logged
    /// diagnostic; the invalid bytes stay in storage until the next
    /// explicit save supersedes them.
    pub fn load(&self) -> Vec<Quote> {
        let raw = match self.backend.read(FAVORITES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read favorites slot, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Quote>>(&raw) {
            Ok(list) => list,
            Err(e) => {
                let corrupt = QuoteError::CorruptState(e.to_string());
                warn!(error = %corrupt, "Recovering favorites as empty");
                Vec::new()
            }
        }
    }

    /// Returns whether `quote` is already in `list`, by text equality.
    #[must_use]
    pub fn is_favorite(&self, list: &[Quote], quote: &Quote) -> bool {
        list.iter().any(|fav| fav.same_text(quote))
    }

    /// Appends `quote` to the list and persists the result. Adding a quote
    /// that is already present is a no-op returning the list unchanged.
    ///
    /// # Errors
    ///
    /// Fails with [`QuoteError::Persistence`] when the storage write fails;
    /// the returned error leaves the previous persisted list in place.
    pub fn add(&mut self, list: Vec<Quote>, quote: Quote) -> Result<Vec<Quote>, QuoteError> {
        if self.is_favorite(&list, &quote) {
            return Ok(list);
        }

        let mut updated = list;
        updated.push(quote);
        self.persist(&updated)?;
        info!(count = updated.len(), "Saved favorite");
        Ok(updated)
    }

    /// Removes every entry whose text matches `quote` and persists the
    /// result. Removing an absent quote persists the list unchanged.
    ///
    /// # Errors
    ///
    /// Fails with [`QuoteError::Persistence`] when the storage write fails;
    /// callers may re-run [`FavoritesStore::load`] to resynchronize.
    pub fn remove(&mut self, list: Vec<Quote>, quote: &Quote) -> Result<Vec<Quote>, QuoteError> {
        let updated: Vec<Quote> = list.into_iter().filter(|fav| !fav.same_text(quote)).collect();
        self.persist(&updated)?;
        info!(count = updated.len(), "Removed favorite");
        Ok(updated)
    }

    fn persist(&mut self, list: &[Quote]) -> Result<(), QuoteError> {
        let raw = serde_json::to_string(list)
            .map_err(|e| QuoteError::Persistence(e.to_string()))?;
        self.backend.write(FAVORITES_KEY, &raw)
    }
}
