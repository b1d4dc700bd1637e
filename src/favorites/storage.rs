//! Key-value storage backends for the favorites slot.
//!
//! The store never touches storage ambiently; a backend is injected so the
//! favorites logic is testable with an in-memory fake and the durable
//! medium is swappable. Writes are last-writer-wins on a single slot, no
//! locking.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::errors::QuoteError;

/// Minimal string key-value interface over a durable, unstructured slot.
pub trait StorageBackend {
    /// Reads the raw value under `key`, `None` when the key is absent.
    fn read(&self, key: &str) -> Result<Option<String>, QuoteError>;

    /// Writes `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str) -> Result<(), QuoteError>;
}

/// In-memory backend used by tests and as an ephemeral fallback.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    slots: HashMap<String, String>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, QuoteError> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), QuoteError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One-file-per-key backend rooted at a directory, the local-disk analog of
/// browser local storage.
#[derive(Debug)]
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, QuoteError> {
        let path = self.slot_path(key);
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(QuoteError::Persistence(format!("{}: {e}", path.display()))),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), QuoteError> {
        fs::create_dir_all(&self.root)
            .map_err(|e| QuoteError::Persistence(format!("{}: {e}", self.root.display())))?;
        let path = self.slot_path(key);
        fs::write(&path, value)
            .map_err(|e| QuoteError::Persistence(format!("{}: {e}", path.display())))
    }
}
