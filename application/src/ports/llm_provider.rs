//! LLM provider port
//!
//! Defines the transport capability the analysis use cases need from an
//! external language-model service: send one prompt to one named model
//! variant, and tell quota exhaustion apart from other failures.

use async_trait::async_trait;
use station_domain::ProviderRole;
use thiserror::Error;

/// Errors that can occur while calling an LLM provider
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Quota exhausted: {0}")]
    QuotaExhausted(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

impl GatewayError {
    /// Whether this error signals rate-limit or usage-quota exhaustion.
    ///
    /// Recognized by variant, by HTTP 429, or by a `429` / `quota` marker
    /// anywhere in the error text.
    pub fn is_quota_exhausted(&self) -> bool {
        match self {
            GatewayError::QuotaExhausted(_) => true,
            GatewayError::Http { status: 429, .. } => true,
            other => {
                let message = other.to_string().to_lowercase();
                message.contains("429") || message.contains("quota")
            }
        }
    }
}

/// Gateway to one external LLM provider
///
/// Implementations (adapters) live in the infrastructure layer. The
/// fallback policy across model variants is not the adapter's concern;
/// see [`ProviderClient`](crate::use_cases::provider_client::ProviderClient).
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Display name credited in `analysis_sources` (e.g. "Gemini")
    fn name(&self) -> &str;

    /// Slot this provider occupies in the fan-out
    fn role(&self) -> ProviderRole;

    /// Model variants in priority order
    fn models(&self) -> &[String];

    /// Send a prompt to one model variant and return its raw text
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, GatewayError>;

    /// Classify an error as quota exhaustion (try the next variant) or not
    /// (give up on this provider)
    fn is_quota_exhausted(&self, error: &GatewayError) -> bool {
        error.is_quota_exhausted()
    }
}
