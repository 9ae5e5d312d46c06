//! Application layer for weather-station
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::AnalysisParams;
pub use ports::{
    llm_provider::{GatewayError, LlmProvider},
    observation_logger::{NoObservationLogger, ObservationEvent, ObservationLogger},
    progress::{AnalysisProgressNotifier, AttemptOutcome, NoProgress},
    search::{NoSearch, SearchGateway},
};
pub use use_cases::analyze_sentiment::{AnalyzeError, AnalyzeSentimentUseCase};
pub use use_cases::provider_client::{ProviderClient, ProviderOutcome};
pub use use_cases::run_forecast::RunForecastUseCase;
