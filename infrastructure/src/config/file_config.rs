//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every section has defaults, so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("provider '{0}' is enabled but lists no models")]
    NoModels(&'static str),

    #[error("provider '{0}' has an empty model name")]
    EmptyModelName(&'static str),

    #[error("server.port cannot be 0")]
    InvalidPort,

    #[error("analysis.max_sources cannot be 0")]
    InvalidMaxSources,
}

// ==================== Providers ====================

/// Gemini (primary provider) configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Whether the provider may be used at all.
    pub enabled: bool,
    /// Environment variable holding the API key (default: "GEMINI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer the env var).
    pub api_key: Option<String>,
    /// Base URL of the Generative Language API.
    pub base_url: String,
    /// Model variants in priority order.
    pub models: Vec<String>,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            models: vec![
                "gemini-2.0-flash".to_string(),
                "gemini-2.0-flash-lite".to_string(),
                "gemini-1.5-flash".to_string(),
            ],
        }
    }
}

/// Groq (secondary provider, OpenAI-compatible) configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGroqConfig {
    /// Whether the provider may be used at all.
    pub enabled: bool,
    /// Environment variable holding the API key (default: "GROQ_API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer the env var).
    pub api_key: Option<String>,
    /// Base URL of the OpenAI-compatible API.
    pub base_url: String,
    /// Model variants in priority order.
    pub models: Vec<String>,
    /// Sampling temperature.
    pub temperature: f32,
    /// Max tokens per response.
    pub max_tokens: u32,
}

impl Default for FileGroqConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_key_env: "GROQ_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.groq.com/openai/v1".to_string(),
            models: vec![
                "llama-3.3-70b-versatile".to_string(),
                "llama-3.1-8b-instant".to_string(),
                "gemma2-9b-it".to_string(),
            ],
            temperature: 0.7,
            max_tokens: 1024,
        }
    }
}

/// `[providers]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// Primary provider settings.
    pub gemini: FileGeminiConfig,
    /// Secondary provider settings.
    pub groq: FileGroqConfig,
}

// ==================== Search ====================

/// Google Custom Search configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGoogleSearchConfig {
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Environment variable holding the search engine ID.
    pub cx_env: String,
    /// Direct API key.
    pub api_key: Option<String>,
    /// Direct search engine ID.
    pub cx: Option<String>,
    /// Custom Search endpoint.
    pub base_url: String,
    /// Recency restriction (`d1` = last 24 hours).
    pub date_restrict: String,
    /// Number of results to request.
    pub num: u32,
    /// Result language restriction.
    pub language: String,
}

impl Default for FileGoogleSearchConfig {
    fn default() -> Self {
        Self {
            api_key_env: "GOOGLE_SEARCH_API_KEY".to_string(),
            cx_env: "GOOGLE_SEARCH_CX".to_string(),
            api_key: None,
            cx: None,
            base_url: "https://www.googleapis.com/customsearch/v1".to_string(),
            date_restrict: "d1".to_string(),
            num: 10,
            language: "lang_ja".to_string(),
        }
    }
}

/// `[search]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSearchConfig {
    pub google: FileGoogleSearchConfig,
}

// ==================== Analysis / Server / Logging ====================

/// `[analysis]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnalysisConfig {
    /// Upper bound per provider in seconds (`0` = wait indefinitely).
    pub provider_timeout_seconds: u64,
    /// Search results echoed back with a forecast.
    pub max_sources: usize,
}

impl Default for FileAnalysisConfig {
    fn default() -> Self {
        Self {
            provider_timeout_seconds: 60,
            max_sources: 5,
        }
    }
}

/// `[server]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
        }
    }
}

/// `[logging]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for daily rolling log files (stderr only when unset).
    pub directory: Option<String>,
    /// JSONL file recording provider attempts and issued forecasts.
    pub observations: Option<String>,
}

/// Complete configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// LLM provider settings
    pub providers: FileProvidersConfig,
    /// Web search settings
    pub search: FileSearchConfig,
    /// Analysis settings
    pub analysis: FileAnalysisConfig,
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Log output settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let gemini = &self.providers.gemini;
        if gemini.enabled {
            check_models("gemini", &gemini.models)?;
        }

        let groq = &self.providers.groq;
        if groq.enabled {
            check_models("groq", &groq.models)?;
        }

        if self.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }

        if self.analysis.max_sources == 0 {
            return Err(ConfigValidationError::InvalidMaxSources);
        }

        Ok(())
    }
}

fn check_models(provider: &'static str, models: &[String]) -> Result<(), ConfigValidationError> {
    if models.is_empty() {
        return Err(ConfigValidationError::NoModels(provider));
    }
    if models.iter().any(|m| m.trim().is_empty()) {
        return Err(ConfigValidationError::EmptyModelName(provider));
    }
    Ok(())
}
