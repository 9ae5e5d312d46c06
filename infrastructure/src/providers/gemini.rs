//! Gemini adapter (Generative Language API)

use super::{log_excerpt, send_for_json};
use crate::config::FileGeminiConfig;
use crate::credentials::resolve_secret;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use station_application::ports::llm_provider::{GatewayError, LlmProvider};
use station_domain::ProviderRole;
use tracing::{debug, info};

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct GenerateResponse {
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct CandidateContent {
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct CandidatePart {
    text: String,
}

impl GenerateResponse {
    fn into_text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .map(|c| {
                c.content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

/// Primary provider backed by Google's Gemini models
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    models: Vec<String>,
}

impl GeminiProvider {
    pub fn new(
        client: reqwest::Client,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        models: Vec<String>,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            models,
        }
    }

    /// Build from config, or `None` when disabled or no usable key is set.
    pub fn try_new(client: reqwest::Client, config: &FileGeminiConfig) -> Option<Self> {
        if !config.enabled {
            info!("Gemini provider disabled by configuration");
            return None;
        }
        let Some(api_key) = resolve_secret(config.api_key.as_deref(), &config.api_key_env) else {
            info!("Gemini API key not set ({}), skipping", config.api_key_env);
            return None;
        };
        info!("Gemini provider ready ({} model variants)", config.models.len());
        Some(Self::new(
            client,
            api_key,
            config.base_url.clone(),
            config.models.clone(),
        ))
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn name(&self) -> &str {
        "Gemini"
    }

    fn role(&self) -> ProviderRole {
        ProviderRole::Primary
    }

    fn models(&self) -> &[String] {
        &self.models
    }

    async fn generate(&self, model: &str, prompt: &str) -> Result<String, GatewayError> {
        debug!(model, "Sending Gemini request");

        let body = GenerateRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
        };
        let request = self
            .client
            .post(self.endpoint(model))
            .query(&[("key", self.api_key.as_str())])
            .json(&body);

        match send_for_json::<GenerateResponse>(request).await {
            Ok(response) => Ok(response.into_text()),
            Err(e) => {
                debug!(model, "Gemini request failed: {}", log_excerpt(&e));
                Err(e)
            }
        }
    }
}
