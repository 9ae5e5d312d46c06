//! Infrastructure layer for weather-station
//!
//! Adapters implementing the application ports: LLM providers over
//! reqwest, Google Custom Search, the JSONL observation log, and
//! configuration file loading.

pub mod config;
pub mod credentials;
pub mod logging;
pub mod providers;
pub mod search;

pub use config::{ConfigLoader, ConfigValidationError, FileConfig};
pub use logging::JsonlObservationLogger;
pub use providers::{GeminiProvider, GroqProvider, build_http_client, build_providers};
pub use search::GoogleSearchGateway;
