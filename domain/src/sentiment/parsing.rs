//! Response parsing for provider output.
//!
//! Models are asked for bare JSON but routinely wrap it in prose or
//! markdown fences. The parser takes the widest brace-delimited span
//! (first `{` to last `}`) and decodes it. Anything that fails to decode
//! is "no data", never an error.

use super::record::SentimentRecord;

/// Extract a [`SentimentRecord`] from raw model text.
///
/// Returns `None` when the text has no `{ ... }` span or the span is not
/// valid JSON. No schema check is made beyond decoding; absent or odd
/// fields fall back to zero/empty (see [`SentimentRecord`]).
///
/// # Examples
///
/// ```
/// use station_domain::sentiment::parsing::parse_sentiment_response;
///
/// let text = "Sure!\n```json\n{\"positive\": 60, \"negative\": 30, \"neutral\": 10}\n```";
/// let record = parse_sentiment_response(text).unwrap();
/// assert_eq!(record.positive, 60);
///
/// assert!(parse_sentiment_response("no braces at all").is_none());
/// ```
pub fn parse_sentiment_response(text: &str) -> Option<SentimentRecord> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }

    serde_json::from_str(&text[start..=end]).ok()
}
