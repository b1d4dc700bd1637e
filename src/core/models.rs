use serde::{Deserialize, Serialize};

/// Theme filter sentinel meaning "no filtering". Matched case-sensitively.
pub const ALL_THEMES: &str = "All";

/// A single quotation. Identity for favorites dedup and removal is exact
/// equality of `text`; two distinct quotes sharing the same text collapse
/// to one favorite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
    pub theme: String,
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>, theme: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            theme: theme.into(),
        }
    }

    /// Returns whether all three fields are present and non-blank.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.text.trim().is_empty()
            && !self.author.trim().is_empty()
            && !self.theme.trim().is_empty()
    }

    /// Case-insensitive exact theme match. The `"All"` sentinel is handled
    /// by the selector, not here.
    #[must_use]
    pub fn matches_theme(&self, theme: &str) -> bool {
        self.theme.eq_ignore_ascii_case(theme)
    }

    /// Returns whether `other` counts as the same quote for favorites
    /// purposes (text equality only).
    #[must_use]
    pub fn same_text(&self, other: &Quote) -> bool {
        self.text == other.text
    }
}
