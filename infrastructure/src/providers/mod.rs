//! LLM provider adapters
//!
//! Each adapter implements the [`LlmProvider`] port for one external
//! service. The model-variant fallback policy lives in the application
//! layer; adapters only send one request and map failures to
//! [`GatewayError`].
//!
//! | Adapter | Role | API |
//! |---------|------|-----|
//! | [`GeminiProvider`] | primary | Generative Language `generateContent` |
//! | [`GroqProvider`] | secondary | OpenAI-compatible chat completions |

mod gemini;
mod groq;

pub use gemini::GeminiProvider;
pub use groq::GroqProvider;

use crate::config::FileProvidersConfig;
use station_application::ports::llm_provider::{GatewayError, LlmProvider};
use station_domain::util::truncate_chars;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// User agent sent with every outbound request
const USER_AGENT: &str = concat!("weather-station/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client shared by providers and search.
///
/// Only the connect phase is bounded here; the overall per-provider bound
/// is applied by the analysis use case.
pub fn build_http_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .connect_timeout(Duration::from_secs(10))
        .build()
}

/// Build every provider whose credential is available, primary first.
pub fn build_providers(
    config: &FileProvidersConfig,
    client: &reqwest::Client,
) -> Vec<Arc<dyn LlmProvider>> {
    let mut providers: Vec<Arc<dyn LlmProvider>> = Vec::new();

    if let Some(gemini) = GeminiProvider::try_new(client.clone(), &config.gemini) {
        providers.push(Arc::new(gemini));
    }
    if let Some(groq) = GroqProvider::try_new(client.clone(), &config.groq) {
        providers.push(Arc::new(groq));
    }

    if providers.is_empty() {
        error!("No LLM provider available: set GEMINI_API_KEY or GROQ_API_KEY");
    } else {
        info!(
            "Available providers: {}",
            providers
                .iter()
                .map(|p| p.name())
                .collect::<Vec<_>>()
                .join(" + ")
        );
    }

    providers
}

/// Map a non-success HTTP status to a gateway error
pub(crate) fn status_error(status: reqwest::StatusCode, body: String) -> GatewayError {
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        GatewayError::QuotaExhausted(body)
    } else {
        GatewayError::Http {
            status: status.as_u16(),
            body,
        }
    }
}

/// Map a reqwest transport error to a gateway error
pub(crate) fn transport_error(error: reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout
    } else if error.is_decode() {
        GatewayError::InvalidResponse(error.to_string())
    } else {
        GatewayError::Connection(error.to_string())
    }
}

/// Error text clipped for log lines
pub(crate) fn log_excerpt(error: &GatewayError) -> String {
    truncate_chars(&error.to_string(), 80).to_string()
}

/// Send a prepared request and return the body of a successful response
pub(crate) async fn send_for_json<T: serde::de::DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, GatewayError> {
    let response = request.send().await.map_err(transport_error)?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(status_error(status, body));
    }

    response.json::<T>().await.map_err(transport_error)
}
