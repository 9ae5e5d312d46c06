//! Domain layer for weather-station
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Sentiment
//!
//! Each analysis provider reads the mood around a [`Keyword`] and answers
//! with free text that should contain a JSON [`SentimentRecord`]:
//!
//! - **Parsing**: recover the record from prose or markdown fences
//! - **Merging**: average several records into one consistent reading
//!
//! ## Weather
//!
//! A merged reading is classified into a [`Weather`] category and packaged
//! as a [`WeatherVerdict`]; with search hits attached it becomes a
//! [`ForecastReport`].

pub mod core;
pub mod forecast;
pub mod prompt;
pub mod search;
pub mod sentiment;
pub mod util;
pub mod weather;

// Re-export commonly used types
pub use core::{error::DomainError, keyword::Keyword, provider::ProviderRole};
pub use forecast::ForecastReport;
pub use prompt::PromptTemplate;
pub use search::{SearchResult, SourceSummary};
pub use sentiment::{SentimentRecord, merge_records, parse_sentiment_response, repair_total};
pub use weather::{Weather, WeatherVerdict};
