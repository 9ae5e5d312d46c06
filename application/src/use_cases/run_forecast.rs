//! Run Forecast use case
//!
//! The full keyword-to-report flow: search, analyze, attach sources.

use crate::ports::progress::{AnalysisProgressNotifier, NoProgress};
use crate::ports::search::SearchGateway;
use crate::use_cases::analyze_sentiment::AnalyzeSentimentUseCase;
use station_domain::{ForecastReport, Keyword};
use std::sync::Arc;
use tracing::info;

/// Use case for producing a forecast report for a keyword
pub struct RunForecastUseCase<S: SearchGateway + ?Sized = dyn SearchGateway> {
    search: Arc<S>,
    analyzer: Arc<AnalyzeSentimentUseCase>,
}

impl<S: SearchGateway + ?Sized> RunForecastUseCase<S> {
    pub fn new(search: Arc<S>, analyzer: Arc<AnalyzeSentimentUseCase>) -> Self {
        Self { search, analyzer }
    }

    pub fn analyzer(&self) -> &AnalyzeSentimentUseCase {
        &self.analyzer
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, keyword: &Keyword) -> ForecastReport {
        self.execute_with_progress(keyword, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        keyword: &Keyword,
        progress: &dyn AnalysisProgressNotifier,
    ) -> ForecastReport {
        info!(keyword = %keyword, "Starting forecast");

        let results = self.search.search(keyword).await;
        info!(keyword = %keyword, "Search returned {} results", results.len());

        let verdict = self
            .analyzer
            .execute_with_progress(keyword, &results, progress)
            .await;
        info!(keyword = %keyword, weather = verdict.weather.as_str(), "Forecast complete");

        ForecastReport::new(
            keyword,
            verdict,
            &results,
            self.analyzer.params().max_sources,
        )
    }
}
