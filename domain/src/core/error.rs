//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Keyword cannot be empty")]
    InvalidKeyword,

    #[error("No analysis providers configured")]
    NoProviders,

    #[error("All analysis providers failed to respond")]
    AllProvidersFailed,
}

impl DomainError {
    /// Check if this error means no provider produced a usable record
    pub fn is_provider_failure(&self) -> bool {
        matches!(
            self,
            DomainError::NoProviders | DomainError::AllProvidersFailed
        )
    }
}
