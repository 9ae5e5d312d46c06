//! Forecast report returned to callers of the weather station

use crate::core::keyword::Keyword;
use crate::search::{SearchResult, SourceSummary};
use crate::weather::{Weather, WeatherVerdict};
use serde::{Deserialize, Serialize};

/// A verdict paired with the keyword and the search hits behind it.
///
/// This is the shape served by `POST /api/analyze` and printed by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastReport {
    pub keyword: String,
    pub weather: Weather,
    pub weather_label: String,
    pub positive: i32,
    pub negative: i32,
    pub neutral: i32,
    pub root_cause: String,
    pub highlighted_event: String,
    pub forecaster_message: String,
    pub analysis_sources: Vec<String>,
    pub sources: Vec<SourceSummary>,
}

impl ForecastReport {
    /// Combine a verdict with the first `max_sources` search results
    pub fn new(
        keyword: &Keyword,
        verdict: WeatherVerdict,
        results: &[SearchResult],
        max_sources: usize,
    ) -> Self {
        Self {
            keyword: keyword.as_str().to_string(),
            weather: verdict.weather,
            weather_label: verdict.weather_label,
            positive: verdict.positive,
            negative: verdict.negative,
            neutral: verdict.neutral,
            root_cause: verdict.root_cause,
            highlighted_event: verdict.highlighted_event,
            forecaster_message: verdict.forecaster_message,
            analysis_sources: verdict.analysis_sources,
            sources: results
                .iter()
                .take(max_sources)
                .map(SourceSummary::from)
                .collect(),
        }
    }
}
