//! Keyword value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// The free-text topic whose mood is being forecast (Value Object)
///
/// Always trimmed and never empty. Construction is fallible so that
/// blank input is rejected before it reaches search or analysis.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Keyword {
    text: String,
}

impl Keyword {
    /// Create a keyword from raw input, trimming surrounding whitespace
    pub fn try_new(text: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidKeyword);
        }
        Ok(Self {
            text: trimmed.to_string(),
        })
    }

    /// Get the keyword text
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl TryFrom<String> for Keyword {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Keyword::try_new(value)
    }
}

impl TryFrom<&str> for Keyword {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Keyword::try_new(value)
    }
}

impl From<Keyword> for String {
    fn from(keyword: Keyword) -> Self {
        keyword.text
    }
}
