//! Weather categories and the sentiment-to-weather decision list

use serde::{Deserialize, Serialize};

/// Discrete weather category summarizing the mood around a keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weather {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rainy,
    Storm,
}

impl Weather {
    /// Wire identifier (`partly_cloudy` etc.)
    pub fn as_str(&self) -> &'static str {
        match self {
            Weather::Sunny => "sunny",
            Weather::PartlyCloudy => "partly_cloudy",
            Weather::Cloudy => "cloudy",
            Weather::Rainy => "rainy",
            Weather::Storm => "storm",
        }
    }

    /// Japanese display label
    pub fn label(&self) -> &'static str {
        match self {
            Weather::Sunny => "快晴",
            Weather::PartlyCloudy => "晴れ時々曇り",
            Weather::Cloudy => "曇り",
            Weather::Rainy => "雨",
            Weather::Storm => "雷雨",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Weather::Sunny => "☀️",
            Weather::PartlyCloudy => "⛅",
            Weather::Cloudy => "☁️",
            Weather::Rainy => "🌧️",
            Weather::Storm => "⛈️",
        }
    }

    /// Classify sentiment into weather.
    ///
    /// Ordered decision list, first match wins:
    ///
    /// 1. `negative >= 80` or controversial: [`Weather::Storm`]
    /// 2. `negative > 50`: [`Weather::Rainy`]
    /// 3. `positive > 70`: [`Weather::Sunny`]
    /// 4. `positive > 50`: [`Weather::PartlyCloudy`]
    /// 5. otherwise: [`Weather::Cloudy`]
    ///
    /// Negative and controversy checks come first, so a heated topic never
    /// reads as sunny however positive it is.
    pub fn classify(positive: i32, negative: i32, has_controversial: bool) -> Self {
        if negative >= 80 || has_controversial {
            Weather::Storm
        } else if negative > 50 {
            Weather::Rainy
        } else if positive > 70 {
            Weather::Sunny
        } else if positive > 50 {
            Weather::PartlyCloudy
        } else {
            Weather::Cloudy
        }
    }
}

impl std::fmt::Display for Weather {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storm_on_heavy_negative() {
        assert_eq!(Weather::classify(10, 80, false), Weather::Storm);
        assert_eq!(Weather::classify(0, 100, false), Weather::Storm);
    }

    #[test]
    fn test_controversy_beats_positive() {
        assert_eq!(Weather::classify(95, 5, true), Weather::Storm);
    }

    #[test]
    fn test_rainy_boundary() {
        assert_eq!(Weather::classify(30, 50, false), Weather::Cloudy);
        assert_eq!(Weather::classify(30, 51, false), Weather::Rainy);
        assert_eq!(Weather::classify(0, 79, false), Weather::Rainy);
    }

    #[test]
    fn test_sunny_boundary() {
        assert_eq!(Weather::classify(70, 10, false), Weather::PartlyCloudy);
        assert_eq!(Weather::classify(71, 10, false), Weather::Sunny);
    }

    #[test]
    fn test_partly_cloudy_boundary() {
        assert_eq!(Weather::classify(50, 10, false), Weather::Cloudy);
        assert_eq!(Weather::classify(51, 10, false), Weather::PartlyCloudy);
    }

    #[test]
    fn test_negative_checked_before_positive() {
        // Inconsistent totals still follow list order
        assert_eq!(Weather::classify(90, 60, false), Weather::Rainy);
    }

    #[test]
    fn test_total_over_all_valid_splits() {
        for positive in 0..=100 {
            for negative in 0..=(100 - positive) {
                let weather = Weather::classify(positive, negative, false);
                let expected = if negative >= 80 {
                    Weather::Storm
                } else if negative > 50 {
                    Weather::Rainy
                } else if positive > 70 {
                    Weather::Sunny
                } else if positive > 50 {
                    Weather::PartlyCloudy
                } else {
                    Weather::Cloudy
                };
                assert_eq!(weather, expected, "p={positive} n={negative}");
            }
        }
    }

    #[test]
    fn test_labels_and_wire_names() {
        assert_eq!(Weather::Storm.label(), "雷雨");
        assert_eq!(Weather::PartlyCloudy.as_str(), "partly_cloudy");
        assert_eq!(
            serde_json::to_string(&Weather::PartlyCloudy).unwrap(),
            r#""partly_cloudy""#
        );
    }
}
