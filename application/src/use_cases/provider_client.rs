//! Provider client
//!
//! Runs one LLM provider across its ordered model variants until one of
//! them yields a parseable [`SentimentRecord`].
//!
//! # Fallback policy
//!
//! | Attempt result | Next step |
//! |----------------|-----------|
//! | record parsed | stop, return it |
//! | response without a record | try next variant |
//! | quota exhausted (429 / quota marker) | try next variant |
//! | any other error | abandon this provider |

use crate::ports::llm_provider::{GatewayError, LlmProvider};
use crate::ports::observation_logger::{NoObservationLogger, ObservationEvent, ObservationLogger};
use crate::ports::progress::{AnalysisProgressNotifier, AttemptOutcome};
use serde_json::json;
use station_domain::util::truncate_chars;
use station_domain::{ProviderRole, SentimentRecord, parse_sentiment_response};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Maximum characters of an error message echoed into logs
const LOG_EXCERPT_CHARS: usize = 80;

/// How a provider's fallback run ended
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderOutcome {
    /// A model variant produced a record
    Record {
        model: String,
        record: SentimentRecord,
    },
    /// Every variant was tried without a record
    Exhausted,
    /// A non-quota error stopped the run early
    Aborted(GatewayError),
}

impl ProviderOutcome {
    pub fn into_record(self) -> Option<SentimentRecord> {
        match self {
            ProviderOutcome::Record { record, .. } => Some(record),
            _ => None,
        }
    }

    pub fn is_record(&self) -> bool {
        matches!(self, ProviderOutcome::Record { .. })
    }
}

/// Applies the model-variant fallback policy to one provider.
///
/// Generic over the transport so the same policy serves every provider;
/// defaults to a trait object for heterogeneous provider lists.
pub struct ProviderClient<P: LlmProvider + ?Sized = dyn LlmProvider> {
    provider: Arc<P>,
    logger: Arc<dyn ObservationLogger>,
}

impl<P: LlmProvider + ?Sized> ProviderClient<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self {
            provider,
            logger: Arc::new(NoObservationLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn ObservationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn name(&self) -> &str {
        self.provider.name()
    }

    pub fn role(&self) -> ProviderRole {
        self.provider.role()
    }

    /// Produce at most one record from this provider
    pub async fn analyze(
        &self,
        prompt: &str,
        progress: &dyn AnalysisProgressNotifier,
    ) -> Option<SentimentRecord> {
        self.run(prompt, progress).await.into_record()
    }

    /// Walk the model variants in order, applying the fallback policy
    pub async fn run(
        &self,
        prompt: &str,
        progress: &dyn AnalysisProgressNotifier,
    ) -> ProviderOutcome {
        let name = self.provider.name();

        for model in self.provider.models() {
            info!(provider = name, model = %model, "Generating analysis");
            progress.on_model_attempt(name, model);

            let (outcome, record) = match self.provider.generate(model, prompt).await {
                Ok(text) => {
                    debug!(provider = name, model = %model, bytes = text.len(), "Received response");
                    match parse_sentiment_response(&text) {
                        Some(record) => (AttemptOutcome::Parsed, Some(record)),
                        None => {
                            warn!(provider = name, model = %model, "Response contained no structured data");
                            (AttemptOutcome::Unparseable, None)
                        }
                    }
                }
                Err(error) if self.provider.is_quota_exhausted(&error) => {
                    warn!(
                        provider = name,
                        model = %model,
                        "Quota exhausted: {}",
                        truncate_chars(&error.to_string(), LOG_EXCERPT_CHARS)
                    );
                    self.record_attempt(model, AttemptOutcome::QuotaExhausted);
                    progress.on_model_outcome(name, model, AttemptOutcome::QuotaExhausted);
                    continue;
                }
                Err(error) => {
                    warn!(
                        provider = name,
                        model = %model,
                        "Provider error, abandoning remaining models: {}",
                        truncate_chars(&error.to_string(), LOG_EXCERPT_CHARS)
                    );
                    self.record_attempt(model, AttemptOutcome::Failed);
                    progress.on_model_outcome(name, model, AttemptOutcome::Failed);
                    return ProviderOutcome::Aborted(error);
                }
            };

            self.record_attempt(model, outcome);
            progress.on_model_outcome(name, model, outcome);

            if let Some(record) = record {
                info!(provider = name, model = %model, "Analysis succeeded");
                return ProviderOutcome::Record {
                    model: model.clone(),
                    record,
                };
            }
        }

        warn!(provider = name, "All models failed");
        ProviderOutcome::Exhausted
    }

    fn record_attempt(&self, model: &str, outcome: AttemptOutcome) {
        self.logger.log(ObservationEvent::new(
            "provider_attempt",
            json!({
                "provider": self.provider.name(),
                "role": self.provider.role().as_str(),
                "model": model,
                "outcome": outcome.as_str(),
            }),
        ));
    }
}
