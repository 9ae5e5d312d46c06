//! Analysis parameters: use case control.
//!
//! [`AnalysisParams`] groups the static parameters that control
//! [`AnalyzeSentimentUseCase`](crate::use_cases::analyze_sentiment::AnalyzeSentimentUseCase)
//! and [`RunForecastUseCase`](crate::use_cases::run_forecast::RunForecastUseCase).
//! These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Analysis control parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisParams {
    /// Upper bound on one provider's whole fallback run.
    ///
    /// `None` waits for every provider indefinitely.
    pub provider_timeout: Option<Duration>,
    /// Number of search results echoed back with a forecast.
    pub max_sources: usize,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            provider_timeout: Some(Duration::from_secs(60)),
            max_sources: 5,
        }
    }
}

impl AnalysisParams {
    // ==================== Builder Methods ====================

    pub fn with_provider_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.provider_timeout = timeout;
        self
    }

    /// Seconds-based timeout where `0` means unbounded
    pub fn with_provider_timeout_seconds(self, seconds: u64) -> Self {
        let timeout = (seconds > 0).then(|| Duration::from_secs(seconds));
        self.with_provider_timeout(timeout)
    }

    pub fn with_max_sources(mut self, max: usize) -> Self {
        self.max_sources = max;
        self
    }
}
