//! Structured sentiment record extracted from one provider response

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One provider's structured reading of the mood around a keyword.
///
/// Providers are asked for percentages summing to 100 but nothing enforces
/// it, so the numeric fields are plain integers that may drift out of range.
/// Deserialization is lenient: missing or non-numeric figures become `0`,
/// missing text becomes empty, and only a literal `true` marks controversy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SentimentRecord {
    #[serde(deserialize_with = "lenient_int")]
    pub positive: i32,
    #[serde(deserialize_with = "lenient_int")]
    pub negative: i32,
    #[serde(deserialize_with = "lenient_int")]
    pub neutral: i32,
    #[serde(deserialize_with = "strict_true")]
    pub has_controversial: bool,
    #[serde(deserialize_with = "lenient_text")]
    pub root_cause: String,
    #[serde(deserialize_with = "lenient_text")]
    pub highlighted_event: String,
    #[serde(deserialize_with = "lenient_text")]
    pub forecaster_message: String,
}

impl SentimentRecord {
    pub fn new(positive: i32, negative: i32, neutral: i32) -> Self {
        Self {
            positive,
            negative,
            neutral,
            ..Default::default()
        }
    }

    pub fn with_controversial(mut self, has_controversial: bool) -> Self {
        self.has_controversial = has_controversial;
        self
    }

    pub fn with_root_cause(mut self, root_cause: impl Into<String>) -> Self {
        self.root_cause = root_cause.into();
        self
    }

    pub fn with_highlighted_event(mut self, event: impl Into<String>) -> Self {
        self.highlighted_event = event.into();
        self
    }

    pub fn with_forecaster_message(mut self, message: impl Into<String>) -> Self {
        self.forecaster_message = message.into();
        self
    }

    /// Sum of the three percentages, widened so drifting figures cannot overflow
    pub fn total(&self) -> i64 {
        i64::from(self.positive) + i64::from(self.negative) + i64::from(self.neutral)
    }
}

/// Integer reading of a loosely typed JSON value.
///
/// Numbers are truncated toward zero; strings contribute their leading
/// signed digit run (`"80%"` reads as 80); anything else reads as 0.
pub(crate) fn int_from_value(value: &Value) -> i32 {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.clamp(i32::MIN as i64, i32::MAX as i64) as i32
            } else if let Some(f) = n.as_f64() {
                f.trunc() as i32
            } else {
                0
            }
        }
        Value::String(s) => leading_int(s),
        _ => 0,
    }
}

fn leading_int(s: &str) -> i32 {
    let s = s.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1i64, rest),
        None => (1i64, s.strip_prefix('+').unwrap_or(s)),
    };

    let run: String = digits.chars().take_while(|c| c.is_ascii_digit()).collect();
    if run.is_empty() {
        return 0;
    }

    let magnitude = run.parse::<i64>().unwrap_or(i32::MAX as i64);
    (sign * magnitude).clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

fn lenient_int<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(int_from_value(&value))
}

fn strict_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(matches!(value, Value::Bool(true)))
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        _ => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_well_formed() {
        let record: SentimentRecord = serde_json::from_str(
            r#"{
                "positive": 70, "negative": 10, "neutral": 20,
                "hasControversial": false,
                "rootCause": "新機能が好評",
                "highlightedEvent": "発表会が話題に",
                "forecasterMessage": "快晴が続くでしょう"
            }"#,
        )
        .unwrap();

        assert_eq!(record.positive, 70);
        assert_eq!(record.total(), 100);
        assert!(!record.has_controversial);
        assert_eq!(record.root_cause, "新機能が好評");
        assert_eq!(record.forecaster_message, "快晴が続くでしょう");
    }

    #[test]
    fn test_missing_fields_default() {
        let record: SentimentRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record, SentimentRecord::default());
    }

    #[test]
    fn test_loose_numbers() {
        let record: SentimentRecord = serde_json::from_str(
            r#"{"positive": "65%", "negative": 20.9, "neutral": "about ten"}"#,
        )
        .unwrap();
        assert_eq!(record.positive, 65);
        assert_eq!(record.negative, 20);
        assert_eq!(record.neutral, 0);
    }

    #[test]
    fn test_only_literal_true_is_controversial() {
        let stringly: SentimentRecord =
            serde_json::from_str(r#"{"hasControversial": "true"}"#).unwrap();
        assert!(!stringly.has_controversial);

        let real: SentimentRecord = serde_json::from_str(r#"{"hasControversial": true}"#).unwrap();
        assert!(real.has_controversial);
    }

    #[test]
    fn test_non_string_text_is_empty() {
        let record: SentimentRecord =
            serde_json::from_str(r#"{"rootCause": null, "highlightedEvent": 42}"#).unwrap();
        assert!(record.root_cause.is_empty());
        assert!(record.highlighted_event.is_empty());
    }

    #[test]
    fn test_leading_int() {
        assert_eq!(leading_int("  42abc"), 42);
        assert_eq!(leading_int("-7"), -7);
        assert_eq!(leading_int("+3"), 3);
        assert_eq!(leading_int("x1"), 0);
        assert_eq!(leading_int(""), 0);
    }
}
