//! Search gateway port
//!
//! Web search is best-effort: an unconfigured or failing search yields an
//! empty result list, and analysis falls back to the model's own knowledge.

use async_trait::async_trait;
use station_domain::{Keyword, SearchResult};

/// Source of recent web results for a keyword
#[async_trait]
pub trait SearchGateway: Send + Sync {
    /// Search for a keyword. Never fails; errors yield an empty list.
    async fn search(&self, keyword: &Keyword) -> Vec<SearchResult>;
}

/// Search gateway that never finds anything
pub struct NoSearch;

#[async_trait]
impl SearchGateway for NoSearch {
    async fn search(&self, _keyword: &Keyword) -> Vec<SearchResult> {
        Vec::new()
    }
}
