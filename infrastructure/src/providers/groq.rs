//! Groq adapter (OpenAI-compatible chat completions)

use super::{log_excerpt, send_for_json};
use crate::config::FileGroqConfig;
use crate::credentials::resolve_secret;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use station_application::ports::llm_provider::{GatewayError, LlmProvider};
use station_domain::ProviderRole;
use tracing::{debug, info};

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Secondary provider backed by Groq-hosted open models
pub struct GroqProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    models: Vec<String>,
    temperature: f32,
    max_tokens: u32,
}

impl GroqProvider {
    pub fn new(
        client: reqwest::Client,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        models: Vec<String>,
    ) -> Self {
        let defaults = FileGroqConfig::default();
        Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            models,
            temperature: defaults.temperature,
            max_tokens: defaults.max_tokens,
        }
    }

    pub fn with_sampling(mut self, temperature: f32, max_tokens: u32) -> Self {
        self.temperature = temperature;
        self.max_tokens = max_tokens;
        self
    }

    /// Build from config, or `None` when disabled or no usable key is set.
    pub fn try_new(client: reqwest::Client, config: &FileGroqConfig) -> Option<Self> {
        if !config.enabled {
            info!("Groq provider disabled by configuration");
            return None;
        }
        let Some(api_key) = resolve_secret(config.api_key.as_deref(), &config.api_key_env) else {
            info!("Groq API key not set ({}), skipping", config.api_key_env);
            return None;
        };
        info!("Groq provider ready ({} model variants)", config.models.len());
        Some(
            Self::new(
                client,
                api_key,
                config.base_url.clone(),
                config.models.clone(),
            )
            .with_sampling(config.temperature, config.max_tokens),
        )
    }
}

#[async_trait]
impl LlmProvider for GroqProvider {
    fn name(&self) -> &str {
        "Groq"
    }

    fn role(&self) -> ProviderRole {
        ProviderRole::Secondary
    }

    fn models(&self) -> &[String] {
        &self.models
    }

    async fn generate(&self, model: &str, prompt: &str) -> Result<String, GatewayError> {
        debug!(model, "Sending Groq request");

        let body = ChatRequest {
            model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };
        let request = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body);

        match send_for_json::<ChatResponse>(request).await {
            Ok(response) => Ok(response
                .choices
                .into_iter()
                .next()
                .and_then(|c| c.message.content)
                .unwrap_or_default()),
            Err(e) => {
                debug!(model, "Groq request failed: {}", log_excerpt(&e));
                Err(e)
            }
        }
    }
}
