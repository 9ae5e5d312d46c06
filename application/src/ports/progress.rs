//! Progress notification port
//!
//! Defines the interface for reporting progress during sentiment analysis.

use station_domain::WeatherVerdict;

/// Result of a single model-variant attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// The response contained a usable record
    Parsed,
    /// The response had no decodable record; the next variant is tried
    Unparseable,
    /// Rate limit or quota hit; the next variant is tried
    QuotaExhausted,
    /// Any other failure; the provider is abandoned
    Failed,
}

impl AttemptOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttemptOutcome::Parsed => "parsed",
            AttemptOutcome::Unparseable => "unparseable",
            AttemptOutcome::QuotaExhausted => "quota_exhausted",
            AttemptOutcome::Failed => "failed",
        }
    }

    /// Whether the provider moves on to its next model variant
    pub fn tries_next_variant(&self) -> bool {
        matches!(
            self,
            AttemptOutcome::Unparseable | AttemptOutcome::QuotaExhausted
        )
    }
}

/// Callback for progress updates during analysis
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console spinners, logs, etc.)
pub trait AnalysisProgressNotifier: Send + Sync {
    /// Called once with the providers about to be queried
    fn on_analysis_start(&self, providers: &[String]);

    /// Called before a model variant is tried
    fn on_model_attempt(&self, _provider: &str, _model: &str) {}

    /// Called after a model variant attempt finishes
    fn on_model_outcome(&self, _provider: &str, _model: &str, _outcome: AttemptOutcome) {}

    /// Called when a provider finishes, with whether it produced a record
    fn on_provider_complete(&self, provider: &str, success: bool);

    /// Called with the final verdict
    fn on_analysis_complete(&self, _verdict: &WeatherVerdict) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl AnalysisProgressNotifier for NoProgress {
    fn on_analysis_start(&self, _providers: &[String]) {}
    fn on_provider_complete(&self, _provider: &str, _success: bool) {}
}
