//! Search results fed into the analysis prompt

use serde::{Deserialize, Serialize};

/// One web search hit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub snippet: String,
    pub link: String,
}

impl SearchResult {
    pub fn new(
        title: impl Into<String>,
        snippet: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            snippet: snippet.into(),
            link: link.into(),
        }
    }
}

/// Title and snippet of a search hit, as shown alongside a forecast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSummary {
    pub title: String,
    pub snippet: String,
}

impl From<&SearchResult> for SourceSummary {
    fn from(result: &SearchResult) -> Self {
        Self {
            title: result.title.clone(),
            snippet: result.snippet.clone(),
        }
    }
}
