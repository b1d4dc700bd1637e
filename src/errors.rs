use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("No quotes available{}", theme_suffix(.theme))]
    EmptyPool { theme: Option<String> },

    #[error("Stored favorites data is corrupt: {0}")]
    CorruptState(String),

    #[error("Failed to persist favorites: {0}")]
    Persistence(String),

    #[error("Failed to fetch quote: {0}")]
    Transport(String),

    #[error("Failed to load quote dataset: {0}")]
    Dataset(String),
}

fn theme_suffix(theme: &Option<String>) -> String {
    match theme {
        Some(t) => format!(" for theme \"{t}\""),
        None => String::new(),
    }
}

impl QuoteError {
    /// Short machine-readable label used in API error payloads.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            QuoteError::EmptyPool { .. } => "EmptyPool",
            QuoteError::CorruptState(_) => "CorruptState",
            QuoteError::Persistence(_) => "PersistenceError",
            QuoteError::Transport(_) => "TransportError",
            QuoteError::Dataset(_) => "DatasetError",
        }
    }
}

impl From<reqwest::Error> for QuoteError {
    fn from(error: reqwest::Error) -> Self {
        QuoteError::Transport(error.to_string())
    }
}

impl From<serde_json::Error> for QuoteError {
    fn from(error: serde_json::Error) -> Self {
        QuoteError::CorruptState(error.to_string())
    }
}
