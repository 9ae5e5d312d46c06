//! Analyze Sentiment use case
//!
//! Orchestrates one sentiment analysis: build the prompt, fan out to every
//! available provider concurrently, merge what comes back, and classify.
//!
//! The use case is total. Whatever happens (no providers, every provider
//! failing, a panic inside a provider branch) the caller receives a
//! [`WeatherVerdict`]; failures degrade to [`WeatherVerdict::unavailable`].

use crate::config::AnalysisParams;
use crate::ports::llm_provider::{GatewayError, LlmProvider};
use crate::ports::observation_logger::{NoObservationLogger, ObservationEvent, ObservationLogger};
use crate::ports::progress::{AnalysisProgressNotifier, NoProgress};
use crate::use_cases::provider_client::{ProviderClient, ProviderOutcome};
use futures::FutureExt;
use futures::future::join_all;
use serde_json::json;
use station_domain::{
    DomainError, Keyword, PromptTemplate, SearchResult, SentimentRecord, WeatherVerdict,
    merge_records,
};
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Errors that end an analysis early (converted to the default verdict)
#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Analysis panicked: {0}")]
    Panicked(String),
}

impl AnalyzeError {
    /// Whether the analysis ended because no provider produced a record
    pub fn is_provider_failure(&self) -> bool {
        matches!(self, AnalyzeError::Domain(e) if e.is_provider_failure())
    }
}

/// Use case for turning a keyword and its search hits into a verdict
pub struct AnalyzeSentimentUseCase {
    clients: Vec<ProviderClient>,
    params: AnalysisParams,
    logger: Arc<dyn ObservationLogger>,
}

impl AnalyzeSentimentUseCase {
    /// Create the use case from the providers that are available.
    ///
    /// Providers are invoked in role order (primary first); the list is
    /// fixed for the lifetime of the use case.
    pub fn new(mut providers: Vec<Arc<dyn LlmProvider>>, params: AnalysisParams) -> Self {
        providers.sort_by_key(|p| p.role());
        Self {
            clients: providers.into_iter().map(ProviderClient::new).collect(),
            params,
            logger: Arc::new(NoObservationLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn ObservationLogger>) -> Self {
        self.clients = self
            .clients
            .into_iter()
            .map(|client| client.with_logger(logger.clone()))
            .collect();
        self.logger = logger;
        self
    }

    /// Names of the providers this use case fans out to, in order
    pub fn provider_names(&self) -> Vec<String> {
        self.clients.iter().map(|c| c.name().to_string()).collect()
    }

    pub fn params(&self) -> &AnalysisParams {
        &self.params
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, keyword: &Keyword, results: &[SearchResult]) -> WeatherVerdict {
        self.execute_with_progress(keyword, results, &NoProgress)
            .await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        keyword: &Keyword,
        results: &[SearchResult],
        progress: &dyn AnalysisProgressNotifier,
    ) -> WeatherVerdict {
        let attempt = AssertUnwindSafe(self.try_execute(keyword, results, progress))
            .catch_unwind()
            .await
            .unwrap_or_else(|panic| Err(AnalyzeError::Panicked(panic_message(&*panic))));

        let verdict = match attempt {
            Ok(verdict) => verdict,
            Err(e) => {
                if e.is_provider_failure() {
                    warn!(keyword = %keyword, "No provider data, issuing default verdict: {}", e);
                } else {
                    error!(keyword = %keyword, "Analysis failed, issuing default verdict: {}", e);
                }
                WeatherVerdict::unavailable(keyword)
            }
        };

        self.logger.log(ObservationEvent::new(
            "forecast_issued",
            json!({
                "keyword": keyword.as_str(),
                "weather": verdict.weather.as_str(),
                "positive": verdict.positive,
                "negative": verdict.negative,
                "neutral": verdict.neutral,
                "observed": verdict.is_observed(),
                "sources": verdict.analysis_sources,
            }),
        ));
        progress.on_analysis_complete(&verdict);
        verdict
    }

    /// The fallible part of the analysis
    pub async fn try_execute(
        &self,
        keyword: &Keyword,
        results: &[SearchResult],
        progress: &dyn AnalysisProgressNotifier,
    ) -> Result<WeatherVerdict, AnalyzeError> {
        let prompt = PromptTemplate::sentiment_prompt(keyword, results);
        debug!(
            chars = prompt.chars().count(),
            search_results = results.len(),
            "Built analysis prompt"
        );

        let names = self.provider_names();
        info!("Using providers: {}", display_names(&names));
        if self.clients.is_empty() {
            return Err(DomainError::NoProviders.into());
        }
        progress.on_analysis_start(&names);

        let outcomes = self.fan_out(&prompt, progress).await;

        let mut records: Vec<SentimentRecord> = Vec::with_capacity(outcomes.len());
        let mut sources = Vec::with_capacity(outcomes.len());
        for (client, outcome) in self.clients.iter().zip(outcomes) {
            if let Some(record) = outcome.into_record() {
                sources.push(client.name().to_string());
                records.push(record);
            }
        }

        let merged = merge_records(records).ok_or(DomainError::AllProvidersFailed)?;
        if sources.len() > 1 {
            info!(
                positive = merged.positive,
                negative = merged.negative,
                neutral = merged.neutral,
                "Merged results from {}",
                display_names(&sources)
            );
        }

        let verdict = WeatherVerdict::from_merged(keyword, &merged, sources);
        info!(
            weather = verdict.weather.as_str(),
            label = %verdict.weather_label,
            "Forecast: {} | sources: {}",
            verdict.weather_label,
            display_names(&verdict.analysis_sources)
        );
        Ok(verdict)
    }

    /// Query every provider concurrently and wait for all of them.
    ///
    /// Outcomes come back in provider order regardless of finishing order.
    async fn fan_out(
        &self,
        prompt: &str,
        progress: &dyn AnalysisProgressNotifier,
    ) -> Vec<ProviderOutcome> {
        let timeout = self.params.provider_timeout;

        let branches = self.clients.iter().map(|client| async move {
            let run = AssertUnwindSafe(client.run(prompt, progress)).catch_unwind();

            let caught = match timeout {
                Some(limit) => match tokio::time::timeout(limit, run).await {
                    Ok(caught) => caught,
                    Err(_) => {
                        warn!(
                            provider = client.name(),
                            "Provider timed out after {:?}", limit
                        );
                        Ok(ProviderOutcome::Aborted(GatewayError::Timeout))
                    }
                },
                None => run.await,
            };

            let outcome = caught.unwrap_or_else(|panic| {
                warn!(provider = client.name(), "Provider task panicked");
                ProviderOutcome::Aborted(GatewayError::Other(panic_message(&*panic)))
            });

            progress.on_provider_complete(client.name(), outcome.is_record());
            outcome
        });

        join_all(branches).await
    }
}

fn display_names(names: &[String]) -> String {
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(" + ")
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use station_domain::{ProviderRole, Weather};
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::Duration;

    // ==================== Test Mocks ====================

    struct MockProvider {
        name: &'static str,
        role: ProviderRole,
        models: Vec<String>,
        replies: Mutex<VecDeque<Result<String, GatewayError>>>,
        delay: Option<Duration>,
        prompts: Mutex<Vec<String>>,
    }

    impl MockProvider {
        fn new(
            name: &'static str,
            role: ProviderRole,
            replies: Vec<Result<String, GatewayError>>,
        ) -> Self {
            Self {
                name,
                role,
                models: vec!["m1".to_string(), "m2".to_string()],
                replies: Mutex::new(VecDeque::from(replies)),
                delay: None,
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }
    }

    #[async_trait]
    impl LlmProvider for MockProvider {
        fn name(&self) -> &str {
            self.name
        }

        fn role(&self) -> ProviderRole {
            self.role
        }

        fn models(&self) -> &[String] {
            &self.models
        }

        async fn generate(&self, _model: &str, prompt: &str) -> Result<String, GatewayError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::QuotaExhausted("no more".to_string())))
        }
    }

    struct PanickingProvider;

    #[async_trait]
    impl LlmProvider for PanickingProvider {
        fn name(&self) -> &str {
            "Panicky"
        }

        fn role(&self) -> ProviderRole {
            ProviderRole::Secondary
        }

        fn models(&self) -> &[String] {
            panic!("model list unavailable")
        }

        async fn generate(&self, _model: &str, _prompt: &str) -> Result<String, GatewayError> {
            Ok(String::new())
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        started: Mutex<Vec<String>>,
        completed: Mutex<Vec<(String, bool)>>,
        verdicts: Mutex<Vec<Weather>>,
    }

    impl AnalysisProgressNotifier for RecordingProgress {
        fn on_analysis_start(&self, providers: &[String]) {
            self.started.lock().unwrap().extend(providers.iter().cloned());
        }

        fn on_provider_complete(&self, provider: &str, success: bool) {
            self.completed
                .lock()
                .unwrap()
                .push((provider.to_string(), success));
        }

        fn on_analysis_complete(&self, verdict: &WeatherVerdict) {
            self.verdicts.lock().unwrap().push(verdict.weather);
        }
    }

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<(&'static str, serde_json::Value)>>,
    }

    impl ObservationLogger for RecordingLogger {
        fn log(&self, event: ObservationEvent) {
            self.events
                .lock()
                .unwrap()
                .push((event.event_type, event.payload));
        }
    }

    impl RecordingLogger {
        fn forecasts(&self) -> Vec<serde_json::Value> {
            self.events
                .lock()
                .unwrap()
                .iter()
                .filter(|(kind, _)| *kind == "forecast_issued")
                .map(|(_, payload)| payload.clone())
                .collect()
        }
    }

    fn record_json(positive: i32, negative: i32, neutral: i32, controversial: bool) -> String {
        format!(
            r#"{{"positive": {positive}, "negative": {negative}, "neutral": {neutral}, "hasControversial": {controversial}, "rootCause": "原因", "highlightedEvent": "出来事", "forecasterMessage": "予報"}}"#
        )
    }

    fn keyword() -> Keyword {
        Keyword::try_new("ferris").unwrap()
    }

    fn use_case(providers: Vec<Arc<dyn LlmProvider>>) -> AnalyzeSentimentUseCase {
        AnalyzeSentimentUseCase::new(providers, AnalysisParams::default())
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_no_providers_gives_default_verdict() {
        let verdict = use_case(vec![]).execute(&keyword(), &[]).await;
        assert_eq!(verdict, WeatherVerdict::unavailable(&keyword()));
        assert!(verdict.analysis_sources.is_empty());
    }

    #[tokio::test]
    async fn test_try_execute_reports_no_providers() {
        let result = use_case(vec![])
            .try_execute(&keyword(), &[], &NoProgress)
            .await;
        assert!(matches!(
            result,
            Err(AnalyzeError::Domain(DomainError::NoProviders))
        ));
    }

    #[test]
    fn test_provider_failures_are_told_apart_from_panics() {
        assert!(AnalyzeError::from(DomainError::NoProviders).is_provider_failure());
        assert!(AnalyzeError::from(DomainError::AllProvidersFailed).is_provider_failure());
        assert!(!AnalyzeError::from(DomainError::InvalidKeyword).is_provider_failure());
        assert!(!AnalyzeError::Panicked("boom".into()).is_provider_failure());
    }

    #[tokio::test]
    async fn test_forecast_log_records_whether_observed() {
        let logger = Arc::new(RecordingLogger::default());
        let gemini = MockProvider::new(
            "Gemini",
            ProviderRole::Primary,
            vec![Ok(record_json(80, 10, 10, false))],
        );

        use_case(vec![Arc::new(gemini) as Arc<dyn LlmProvider>])
            .with_logger(logger.clone())
            .execute(&keyword(), &[])
            .await;
        use_case(vec![])
            .with_logger(logger.clone())
            .execute(&keyword(), &[])
            .await;

        let forecasts = logger.forecasts();
        assert_eq!(forecasts.len(), 2);
        assert_eq!(forecasts[0]["observed"], true);
        assert_eq!(forecasts[0]["weather"], "sunny");
        assert_eq!(forecasts[1]["observed"], false);
        assert_eq!(forecasts[1]["weather"], "cloudy");
    }

    #[tokio::test]
    async fn test_both_providers_merge_to_storm() {
        let gemini = MockProvider::new(
            "Gemini",
            ProviderRole::Primary,
            vec![Ok(record_json(80, 10, 10, false))],
        );
        let groq = MockProvider::new(
            "Groq",
            ProviderRole::Secondary,
            vec![Ok(record_json(60, 30, 10, true))],
        );

        let verdict = use_case(vec![Arc::new(gemini) as Arc<dyn LlmProvider>, Arc::new(groq)])
            .execute(&keyword(), &[])
            .await;

        assert_eq!(verdict.positive, 70);
        assert_eq!(verdict.negative, 20);
        assert_eq!(verdict.neutral, 10);
        assert_eq!(verdict.weather, Weather::Storm);
        assert_eq!(verdict.weather_label, "雷雨");
        assert_eq!(verdict.analysis_sources, vec!["Gemini", "Groq"]);
    }

    #[tokio::test]
    async fn test_single_success_used_verbatim() {
        let gemini = MockProvider::new(
            "Gemini",
            ProviderRole::Primary,
            vec![Err(GatewayError::Connection("refused".into()))],
        );
        let groq = MockProvider::new(
            "Groq",
            ProviderRole::Secondary,
            vec![Ok(record_json(55, 25, 25, false))],
        );

        let verdict = use_case(vec![Arc::new(gemini) as Arc<dyn LlmProvider>, Arc::new(groq)])
            .execute(&keyword(), &[])
            .await;

        // A lone record is not repaired: 55 + 25 + 25 stays as reported
        assert_eq!(
            (verdict.positive, verdict.negative, verdict.neutral),
            (55, 25, 25)
        );
        assert_eq!(verdict.weather, Weather::PartlyCloudy);
        assert_eq!(verdict.root_cause, "原因");
        assert_eq!(verdict.analysis_sources, vec!["Groq"]);
    }

    #[tokio::test]
    async fn test_all_providers_failing_gives_default_verdict() {
        let gemini = MockProvider::new(
            "Gemini",
            ProviderRole::Primary,
            vec![Err(GatewayError::Http {
                status: 500,
                body: "boom".into(),
            })],
        );
        let groq = MockProvider::new(
            "Groq",
            ProviderRole::Secondary,
            vec![Ok("no json here".into()), Ok("still nothing".into())],
        );

        let verdict = use_case(vec![Arc::new(gemini) as Arc<dyn LlmProvider>, Arc::new(groq)])
            .execute(&keyword(), &[])
            .await;
        assert_eq!(verdict, WeatherVerdict::unavailable(&keyword()));
    }

    #[tokio::test]
    async fn test_sources_follow_role_order_not_insertion_order() {
        let groq = MockProvider::new(
            "Groq",
            ProviderRole::Secondary,
            vec![Ok(record_json(50, 25, 25, false))],
        );
        let gemini = MockProvider::new(
            "Gemini",
            ProviderRole::Primary,
            vec![Ok(record_json(50, 25, 25, false))],
        )
        .with_delay(Duration::from_millis(20));

        let uc = use_case(vec![Arc::new(groq) as Arc<dyn LlmProvider>, Arc::new(gemini)]);
        assert_eq!(uc.provider_names(), vec!["Gemini", "Groq"]);

        let verdict = uc.execute(&keyword(), &[]).await;
        assert_eq!(verdict.analysis_sources, vec!["Gemini", "Groq"]);
    }

    #[tokio::test]
    async fn test_same_prompt_sent_to_every_provider() {
        let gemini = Arc::new(MockProvider::new(
            "Gemini",
            ProviderRole::Primary,
            vec![Ok(record_json(50, 25, 25, false))],
        ));
        let groq = Arc::new(MockProvider::new(
            "Groq",
            ProviderRole::Secondary,
            vec![Ok(record_json(50, 25, 25, false))],
        ));
        let results = vec![SearchResult::new("見出し", "本文", "https://example.com")];

        use_case(vec![gemini.clone() as Arc<dyn LlmProvider>, groq.clone()])
            .execute(&keyword(), &results)
            .await;

        let sent_a = gemini.prompts.lock().unwrap().clone();
        let sent_b = groq.prompts.lock().unwrap().clone();
        assert_eq!(sent_a.len(), 1);
        assert_eq!(sent_a, sent_b);
        assert!(sent_a[0].contains("1. 見出し\n   本文"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_provider_is_cut_off_by_timeout() {
        let gemini = MockProvider::new(
            "Gemini",
            ProviderRole::Primary,
            vec![Ok(record_json(90, 5, 5, false))],
        );
        let groq = MockProvider::new(
            "Groq",
            ProviderRole::Secondary,
            vec![Ok(record_json(10, 60, 30, false))],
        )
        .with_delay(Duration::from_secs(600));

        let params = AnalysisParams::default().with_provider_timeout(Some(Duration::from_secs(5)));
        let uc = AnalyzeSentimentUseCase::new(vec![Arc::new(gemini) as Arc<dyn LlmProvider>, Arc::new(groq)], params);

        let verdict = uc.execute(&keyword(), &[]).await;
        assert_eq!(verdict.analysis_sources, vec!["Gemini"]);
        assert_eq!(verdict.weather, Weather::Sunny);
    }

    #[tokio::test]
    async fn test_panicking_provider_is_absorbed() {
        let gemini = MockProvider::new(
            "Gemini",
            ProviderRole::Primary,
            vec![Ok(record_json(20, 60, 20, false))],
        );

        let uc = use_case(vec![Arc::new(gemini) as Arc<dyn LlmProvider>, Arc::new(PanickingProvider)]);
        let verdict = uc.execute(&keyword(), &[]).await;

        assert_eq!(verdict.weather, Weather::Rainy);
        assert_eq!(verdict.analysis_sources, vec!["Gemini"]);
    }

    #[tokio::test]
    async fn test_progress_callbacks() {
        let gemini = MockProvider::new(
            "Gemini",
            ProviderRole::Primary,
            vec![Ok(record_json(80, 10, 10, false))],
        );
        let groq = MockProvider::new(
            "Groq",
            ProviderRole::Secondary,
            vec![Err(GatewayError::Http {
                status: 401,
                body: "unauthorized".into(),
            })],
        );
        let progress = RecordingProgress::default();

        use_case(vec![Arc::new(gemini) as Arc<dyn LlmProvider>, Arc::new(groq)])
            .execute_with_progress(&keyword(), &[], &progress)
            .await;

        assert_eq!(*progress.started.lock().unwrap(), vec!["Gemini", "Groq"]);
        let mut completed = progress.completed.lock().unwrap().clone();
        completed.sort();
        assert_eq!(
            completed,
            vec![("Gemini".to_string(), true), ("Groq".to_string(), false)]
        );
        assert_eq!(*progress.verdicts.lock().unwrap(), vec![Weather::Sunny]);
    }
}
