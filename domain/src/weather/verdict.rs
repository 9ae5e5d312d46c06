//! The final weather verdict for one keyword

use super::classify::Weather;
use crate::core::keyword::Keyword;
use crate::sentiment::SentimentRecord;
use serde::{Deserialize, Serialize};

const FALLBACK_ROOT_CAUSE: &str = "現在の空気感を分析中です";
const FALLBACK_HIGHLIGHTED_EVENT: &str = "特筆すべき事象は見当たりませんでした。";

const UNAVAILABLE_ROOT_CAUSE: &str =
    "分析データが不足しています（APIクォータ超過の可能性があります）";

/// Default percentages used when no provider contributed
pub const UNAVAILABLE_SPLIT: (i32, i32, i32) = (40, 20, 40);

/// Aggregated, classified sentiment for a keyword.
///
/// Immutable once built; serialized with camelCase field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherVerdict {
    pub weather: Weather,
    pub weather_label: String,
    pub positive: i32,
    pub negative: i32,
    pub neutral: i32,
    pub root_cause: String,
    pub highlighted_event: String,
    pub forecaster_message: String,
    /// Providers that contributed a record, in invocation order
    pub analysis_sources: Vec<String>,
}

impl WeatherVerdict {
    /// Build a verdict from a merged record.
    ///
    /// Percentages are clamped into `0..=100` before classification and
    /// blank text fields are filled with fixed fallback wording.
    pub fn from_merged(
        keyword: &Keyword,
        merged: &SentimentRecord,
        analysis_sources: Vec<String>,
    ) -> Self {
        let positive = merged.positive.clamp(0, 100);
        let negative = merged.negative.clamp(0, 100);
        let neutral = merged.neutral.clamp(0, 100);
        let weather = Weather::classify(positive, negative, merged.has_controversial);

        Self {
            weather,
            weather_label: weather.label().to_string(),
            positive,
            negative,
            neutral,
            root_cause: non_empty_or(&merged.root_cause, || FALLBACK_ROOT_CAUSE.to_string()),
            highlighted_event: non_empty_or(&merged.highlighted_event, || {
                FALLBACK_HIGHLIGHTED_EVENT.to_string()
            }),
            forecaster_message: non_empty_or(&merged.forecaster_message, || {
                format!("「{}」界隈の天気をお伝えします。", keyword)
            }),
            analysis_sources,
        }
    }

    /// Low-confidence verdict used when analysis could not be performed.
    ///
    /// Always cloudy at 40/20/40, with apologetic text and no sources.
    pub fn unavailable(keyword: &Keyword) -> Self {
        let (positive, negative, neutral) = UNAVAILABLE_SPLIT;
        Self {
            weather: Weather::Cloudy,
            weather_label: Weather::Cloudy.label().to_string(),
            positive,
            negative,
            neutral,
            root_cause: UNAVAILABLE_ROOT_CAUSE.to_string(),
            highlighted_event: String::new(),
            forecaster_message: format!(
                "「{}」界隈の天気は現在観測が困難な状況です。雲の隙間から様子を伺っていますので、しばらくお待ちください！",
                keyword
            ),
            analysis_sources: Vec::new(),
        }
    }

    /// True when at least one provider contributed
    pub fn is_observed(&self) -> bool {
        !self.analysis_sources.is_empty()
    }
}

fn non_empty_or(text: &str, fallback: impl FnOnce() -> String) -> String {
    if text.is_empty() {
        fallback()
    } else {
        text.to_string()
    }
}
