//! Sentiment subdomain: the structured record a provider produces, how it
//! is recovered from free text, and how several are merged into one.

pub mod merge;
pub mod parsing;
pub mod record;

pub use merge::{merge_records, repair_total};
pub use parsing::parse_sentiment_response;
pub use record::SentimentRecord;
